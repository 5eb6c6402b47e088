//! Pipeline orchestration for delta operations.
//!
//! Shared parse → diff → score → report logic for CLI command handlers.

mod delta_stage;
mod output;
mod parse;

pub use delta_stage::{build_report, compute_delta, DeltaOutcome};
pub use output::{write_output, OutputTarget};
pub use parse::{parse_spec_with_context, ParsedSpec};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, whatever the score
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
}
