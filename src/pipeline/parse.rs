//! Document parsing stage.

use crate::model::ApiSpec;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A parsed document and where it came from
#[derive(Debug, Clone)]
pub struct ParsedSpec {
    /// The normalized document
    pub spec: ApiSpec,
    /// Source path
    pub path: PathBuf,
}

impl ParsedSpec {
    /// Get a reference to the document
    #[must_use]
    pub const fn spec(&self) -> &ApiSpec {
        &self.spec
    }

    /// Source path rendered for reports
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Parse an API document with context for error messages
pub fn parse_spec_with_context(path: &Path, quiet: bool) -> Result<ParsedSpec> {
    if !quiet {
        tracing::info!("Parsing API document: {:?}", path);
    }

    let raw_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read API document: {}", path.display()))?;
    let spec = crate::parsers::parse_spec_str(&raw_content)
        .with_context(|| format!("Failed to parse API document: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} {} document with {} endpoints",
            spec.info.format.name(),
            spec.info.spec_version,
            spec.endpoint_count()
        );
    }

    Ok(ParsedSpec {
        spec,
        path: path.to_path_buf(),
    })
}
