//! Top-level API document.

use super::{EndpointKey, Operation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Source format a document was parsed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecFormat {
    #[default]
    OpenApi3,
    Swagger2,
}

impl SpecFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenApi3 => "OpenAPI",
            Self::Swagger2 => "Swagger",
        }
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecInfo {
    /// `info.title`
    pub title: Option<String>,
    /// `info.version` (the API's own version, not the format version)
    pub version: Option<String>,
    /// Format version string, e.g. `3.0.3` or `2.0`
    pub spec_version: String,
    /// Source format
    pub format: SpecFormat,
}

/// A parsed API document.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ApiSpec {
    /// Document metadata
    pub info: SpecInfo,
    /// Operations keyed by (path, method), in document order
    pub endpoints: IndexMap<EndpointKey, Operation>,
    /// Hash of the raw document content (0 when built in memory)
    pub content_hash: u64,
}

impl ApiSpec {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation, replacing any existing operation with the same key.
    pub fn with_endpoint(mut self, key: EndpointKey, operation: Operation) -> Self {
        self.endpoints.insert(key, operation);
        self
    }

    /// Add an operation in place.
    pub fn add_endpoint(&mut self, key: EndpointKey, operation: Operation) {
        self.endpoints.insert(key, operation);
    }

    /// Look up an operation.
    #[must_use]
    pub fn operation(&self, key: &EndpointKey) -> Option<&Operation> {
        self.endpoints.get(key)
    }

    /// Number of (path, method) pairs.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Distinct paths, in document order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for key in self.endpoints.keys() {
            if !paths.contains(&key.path.as_str()) {
                paths.push(&key.path);
            }
        }
        paths
    }
}
