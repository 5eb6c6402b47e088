//! YAML reporter.

use super::{DeltaReport, ReportFormat, ReportGenerator};
use crate::error::{OasDeltaError, ReportErrorKind, Result};

/// YAML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReporter;

impl YamlReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for YamlReporter {
    fn generate(&self, report: &DeltaReport) -> Result<String> {
        serde_yaml::to_string(report).map_err(|e| {
            OasDeltaError::report(
                "rendering YAML report",
                ReportErrorKind::YamlSerializationError(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Yaml
    }
}
