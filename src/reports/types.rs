//! Report type definitions.

use crate::delta::DeltaBreakdown;
use crate::model::ApiSpec;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The bare score on one line
    #[default]
    Text,
    /// Structured JSON output
    Json,
    /// Structured YAML output
    Yaml,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Everything a reporter renders for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub tool: ToolInfo,
    pub delta: f64,
    pub asymmetric: bool,
    pub base: DocumentInfo,
    pub revision: DocumentInfo,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breakdown: Option<DeltaBreakdown>,
}

impl DeltaReport {
    pub fn new(delta: f64, asymmetric: bool, base: DocumentInfo, revision: DocumentInfo) -> Self {
        Self {
            tool: ToolInfo::default(),
            delta,
            asymmetric,
            base,
            revision,
            breakdown: None,
        }
    }

    #[must_use]
    pub fn with_breakdown(mut self, breakdown: DeltaBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }
}

/// Tool identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Summary of one compared document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_version: Option<String>,
    /// Format and version, e.g. `OpenAPI 3.0.3`
    pub format: String,
    pub endpoint_count: usize,
}

impl DocumentInfo {
    pub fn from_spec(spec: &ApiSpec, path: Option<String>) -> Self {
        Self {
            path,
            title: spec.info.title.clone(),
            api_version: spec.info.version.clone(),
            format: format!("{} {}", spec.info.format.name(), spec.info.spec_version),
            endpoint_count: spec.endpoint_count(),
        }
    }
}
