//! Report generation for delta results.
//!
//! - Text: the bare score, suitable for shell capture
//! - JSON: structured data for programmatic integration
//! - YAML: the same structure as JSON

mod json;
mod text;
mod types;
mod yaml;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::{DeltaReport, DocumentInfo, ReportFormat, ToolInfo};
pub use yaml::YamlReporter;

use crate::error::Result;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report
    fn generate(&self, report: &DeltaReport) -> Result<String>;

    /// Write a report to a writer
    fn write_report(&self, report: &DeltaReport, writer: &mut dyn Write) -> Result<()> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create the reporter for a format.
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Yaml => Box::new(YamlReporter::new()),
    }
}
