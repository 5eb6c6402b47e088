//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod delta;

pub use delta::run_delta;

// Re-export config types used by handlers
pub use crate::config::DeltaCommandConfig;
