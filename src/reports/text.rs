//! Plain text reporter.
//!
//! Prints the score alone so the output can be captured by shell scripts.
//! With a breakdown attached, one line per endpoint follows the score.

use super::{DeltaReport, ReportFormat, ReportGenerator};
use crate::error::Result;
use std::fmt::Write;

/// Plain text reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, report: &DeltaReport) -> Result<String> {
        let mut out = format!("{}\n", report.delta);

        let Some(breakdown) = &report.breakdown else {
            return Ok(out);
        };

        // writing to a String cannot fail
        let counts = breakdown.endpoints;
        let _ = writeln!(
            out,
            "endpoints: {} added, {} deleted, {} modified, {} unchanged",
            counts.added, counts.deleted, counts.modified, counts.unchanged
        );
        for endpoint in &breakdown.added {
            let _ = writeln!(out, "  + {endpoint}");
        }
        for endpoint in &breakdown.deleted {
            let _ = writeln!(out, "  - {endpoint}");
        }
        for endpoint in &breakdown.modified {
            let _ = writeln!(
                out,
                "  ~ {} delta={} parameters={} responses={} ({} responses)",
                endpoint.endpoint,
                endpoint.delta,
                endpoint.parameters.score,
                endpoint.responses.score,
                endpoint.responses.weight
            );
            for param in &endpoint.parameter_changes {
                let _ = writeln!(
                    out,
                    "      {} {} schema={}",
                    param.location, param.name, param.schema_delta
                );
            }
        }
        let _ = writeln!(out, "modified score: {}", breakdown.modified_score);
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
