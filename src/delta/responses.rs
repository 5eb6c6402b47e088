//! Response delta.

use super::ratio::{modified_contribution, ratio};
use super::WeightedDelta;
use crate::diff::{DiffNode, ResponsesDiff};

/// Ratio of changed responses of one endpoint, weighted by its response count.
#[must_use]
pub fn responses_delta(asymmetric: bool, diff: &ResponsesDiff) -> WeightedDelta {
    let counts = diff.counts();
    let score = ratio(
        asymmetric,
        counts.added,
        counts.deleted,
        modified_contribution(asymmetric, counts.modified),
        counts.total(),
    );
    WeightedDelta::new(score, counts.total())
}
