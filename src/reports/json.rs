//! JSON reporter.

use super::{DeltaReport, ReportFormat, ReportGenerator};
use crate::error::{OasDeltaError, ReportErrorKind, Result};

/// JSON report generator
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &DeltaReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| {
                OasDeltaError::report(
                    "rendering JSON report",
                    ReportErrorKind::JsonSerializationError(e.to_string()),
                )
            })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
