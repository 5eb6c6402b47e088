//! Delta command handler.
//!
//! Implements the `delta` subcommand for scoring two API documents.

use crate::config::{DeltaCommandConfig, Validatable};
use crate::pipeline::{
    build_report, compute_delta, exit_codes, parse_spec_with_context, write_output, OutputTarget,
};
use crate::reports::create_reporter;
use anyhow::{bail, Context, Result};

/// Run the delta command, returning the desired exit code.
///
/// The score never influences the exit code; only failures do, and those
/// are returned as errors.
#[allow(clippy::needless_pass_by_value)]
pub fn run_delta(config: DeltaCommandConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let quiet = config.behavior.quiet;

    let base = parse_spec_with_context(&config.paths.base, quiet)?;
    let revision = parse_spec_with_context(&config.paths.revision, quiet)?;

    let outcome = compute_delta(&config, &base, &revision)?;
    let report = build_report(&config, &base, &revision, outcome);

    let reporter = create_reporter(config.output.format);
    let rendered = reporter
        .generate(&report)
        .with_context(|| format!("Failed to render {} report", reporter.format()))?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target, quiet)?;

    Ok(exit_codes::SUCCESS)
}
