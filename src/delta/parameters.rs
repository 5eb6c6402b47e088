//! Parameter-location delta.

use super::ratio::{modified_contribution, ratio};
use crate::diff::{DiffNode, ParametersDiff};

/// Ratio of changed parameters of one endpoint, summed across locations.
///
/// Every modified parameter counts as [`COEFFICIENT_MODIFIED`](super::COEFFICIENT_MODIFIED)
/// of a unit, however much its schema changed.
#[must_use]
pub fn parameters_delta(asymmetric: bool, diff: &ParametersDiff) -> f64 {
    let counts = diff.counts();
    ratio(
        asymmetric,
        counts.added,
        counts.deleted,
        modified_contribution(asymmetric, counts.modified),
        counts.total(),
    )
}
