//! Delta scoring engine.
//!
//! Reduces a [`SpecDiff`] to one number in `[0, 1]`: 0 for documents with
//! no differences, 1 when nothing is shared.
//!
//! The score is built bottom-up. Parameter and response records become
//! ratios of changed to compared elements, those are averaged per endpoint,
//! and the endpoint average is mixed with the endpoint counts at the top.
//!
//! In asymmetric mode additions are ignored and modifications are charged
//! at half rate, so for any two documents
//! `get(true, diff(a, b)) + get(true, diff(b, a)) == get(false, diff(a, b))`.
//!
//! # Example
//!
//! ```ignore
//! use oas_delta::{delta, diff::DiffEngine};
//!
//! let diff = DiffEngine::new().diff(&base, &revision)?;
//! let symmetric = delta::get(false, &diff);
//! let breaking_side = delta::get(true, &diff);
//! ```

mod breakdown;
mod endpoints;
mod parameters;
mod ratio;
mod responses;
mod schema;
mod weighted;

pub use breakdown::{DeltaBreakdown, EndpointBreakdown, ParameterBreakdown};
pub use endpoints::{endpoint_delta, endpoints_delta};
pub use parameters::parameters_delta;
pub use ratio::{dampen, ratio, ASYMMETRIC_DAMPENING, COEFFICIENT_MODIFIED};
pub use responses::responses_delta;
pub use schema::schema_delta;
pub use weighted::{weighted_average, WeightedDelta};

use crate::diff::{DiffNode, SpecDiff};

/// Modified-endpoint count at which per-endpoint scoring goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Score a diff record. Never fails.
#[must_use]
pub fn get(asymmetric: bool, diff: &SpecDiff) -> f64 {
    DeltaScorer::new().asymmetric(asymmetric).score(diff)
}

/// Configurable entry point to the scoring engine.
#[derive(Debug, Clone, Copy)]
pub struct DeltaScorer {
    asymmetric: bool,
    parallel_threshold: usize,
}

impl Default for DeltaScorer {
    fn default() -> Self {
        Self {
            asymmetric: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DeltaScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn asymmetric(mut self, asymmetric: bool) -> Self {
        self.asymmetric = asymmetric;
        self
    }

    #[must_use]
    pub const fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn is_asymmetric(&self) -> bool {
        self.asymmetric
    }

    /// Score a diff record, clamped to `[0, 1]`.
    #[must_use]
    pub fn score(&self, diff: &SpecDiff) -> f64 {
        if diff.is_empty() {
            return 0.0;
        }
        let score =
            endpoints::endpoints_delta_with(self.asymmetric, &diff.endpoints, self.parallel_threshold);
        score.clamp(0.0, 1.0)
    }

    /// Score a diff record and explain the result.
    pub fn explain(&self, diff: &SpecDiff) -> (f64, DeltaBreakdown) {
        (self.score(diff), DeltaBreakdown::build(self.asymmetric, diff))
    }
}
