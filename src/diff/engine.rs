//! Diff engine implementation.

use super::changes::EndpointChangeComputer;
use super::{DiffNode, SpecDiff};
use crate::error::{DiffErrorKind, OasDeltaError, Result};
use crate::model::ApiSpec;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Options controlling how endpoints are paired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Only compare paths matching this regular expression
    pub match_path: Option<String>,
    /// Prefix removed from base paths before pairing
    pub strip_prefix_base: Option<String>,
    /// Prefix removed from revision paths before pairing
    pub strip_prefix_revision: Option<String>,
    /// Pair `/users/{id}` with `/users/{userId}`
    pub normalize_path_params: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            match_path: None,
            strip_prefix_base: None,
            strip_prefix_revision: None,
            normalize_path_params: true,
        }
    }
}

/// Builds the hierarchical diff record for two API documents.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: DiffOptions,
    path_filter: Option<Regex>,
}

impl DiffEngine {
    /// Create a diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diff engine with the given options, compiling the path filter.
    pub fn with_options(options: DiffOptions) -> Result<Self> {
        let path_filter = options
            .match_path
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    OasDeltaError::diff(
                        "compiling path filter",
                        DiffErrorKind::InvalidPathFilter {
                            pattern: pattern.to_string(),
                            message: e.to_string(),
                        },
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            options,
            path_filter,
        })
    }

    /// Only compare paths matching `pattern`.
    pub fn match_path(self, pattern: impl Into<String>) -> Result<Self> {
        Self::with_options(DiffOptions {
            match_path: Some(pattern.into()),
            ..self.options
        })
    }

    /// Enable or disable path template normalization
    #[must_use]
    pub fn normalize_path_params(mut self, normalize: bool) -> Self {
        self.options.normalize_path_params = normalize;
        self
    }

    /// Set the prefixes removed from base and revision paths
    #[must_use]
    pub fn strip_prefixes(mut self, base: Option<String>, revision: Option<String>) -> Self {
        self.options.strip_prefix_base = base;
        self.options.strip_prefix_revision = revision;
        self
    }

    /// Get the options in effect.
    #[must_use]
    pub const fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two documents and return the diff record
    pub fn diff(&self, base: &ApiSpec, revision: &ApiSpec) -> Result<SpecDiff> {
        let mut result = SpecDiff::new();

        // Quick check: if content hashes match, documents are identical
        if base.content_hash == revision.content_hash && base.content_hash != 0 {
            tracing::debug!("Documents have identical content, skipping comparison");
            return Ok(result);
        }

        result.endpoints = EndpointChangeComputer::new(&self.options, self.path_filter.as_ref())
            .compute(base, revision);

        let counts = result.counts();
        tracing::debug!(
            "Endpoints: {} added, {} deleted, {} modified, {} unchanged",
            counts.added,
            counts.deleted,
            counts.modified,
            counts.unchanged
        );
        Ok(result)
    }
}
