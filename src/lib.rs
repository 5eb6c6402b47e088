//! **A scoring engine for changes between two API documents.**
//!
//! `oas-delta` reduces the difference between a base and a revised
//! `OpenAPI` 3.x or Swagger 2.0 document to a single number in `[0, 1]`:
//! 0 when the documents describe the same API, 1 when they share nothing.
//! It powers both a command-line interface and a Rust library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the normalized document, [`ApiSpec`]. Both formats parse
//!   into it, so nothing downstream knows which format a document used.
//! - **[`parsers`]**: format detection, local `$ref` resolution and
//!   normalization into [`ApiSpec`].
//! - **[`diff`]**: the [`DiffEngine`], which pairs endpoints and produces a
//!   hierarchical [`SpecDiff`] record.
//! - **[`delta`]**: the scoring engine. [`delta::get`] is the single entry
//!   point; [`DeltaScorer`] adds parallel scoring and explanations.
//! - **[`reports`]**: text, JSON and YAML renderings of a result.
//! - **[`pipeline`]** and **[`cli`]**: orchestration used by the binary.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use oas_delta::{delta, parse_spec, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = parse_spec(Path::new("api/v1.yaml"))?;
//!     let revision = parse_spec(Path::new("api/v2.yaml"))?;
//!
//!     let diff = DiffEngine::new().diff(&base, &revision)?;
//!     println!("symmetric:  {}", delta::get(false, &diff));
//!     println!("asymmetric: {}", delta::get(true, &diff));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Asymmetric Mode
//!
//! Asymmetric scoring ignores everything the revision adds and charges
//! modifications at half rate. Summing both directions gives back the
//! symmetric score:
//!
//! ```text
//! get(true, diff(a, b)) + get(true, diff(b, a)) == get(false, diff(a, b))
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Counts become ratios: usize to f64 casts are bounded by document size
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `base`/`revision` pairs are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod delta;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, DeltaConfig, MatchingConfig, OutputConfig};
pub use config::{ConfigError, ConfigOverrides, DeltaCommandConfig, Validatable};
pub use delta::{DeltaBreakdown, DeltaScorer};
pub use diff::{ChangeCounts, DiffEngine, DiffNode, DiffOptions, SpecDiff};
pub use error::{ErrorContext, OasDeltaError, Result};
pub use model::{ApiSpec, EndpointKey, HttpMethod, Operation, SpecFormat};
pub use parsers::{parse_spec, parse_spec_str, OpenApiParser};
pub use reports::{DeltaReport, ReportFormat, ReportGenerator};
