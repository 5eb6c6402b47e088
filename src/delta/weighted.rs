//! Weighted-average combinator.

use serde::{Deserialize, Serialize};

/// A score paired with how much it should count in an average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedDelta {
    pub score: f64,
    pub weight: usize,
}

impl WeightedDelta {
    #[must_use]
    pub const fn new(score: f64, weight: usize) -> Self {
        Self { score, weight }
    }
}

/// `Σ(score·weight) / Σ(weight)`.
///
/// Returns 0 when the numerator is exactly zero, which also covers an empty
/// input and an all-zero weight sum.
#[must_use]
pub fn weighted_average(deltas: &[WeightedDelta]) -> f64 {
    let (numerator, denominator) = deltas.iter().fold((0.0, 0usize), |(num, den), d| {
        (num + d.score * d.weight as f64, den + d.weight)
    });

    if numerator == 0.0 {
        return 0.0;
    }
    numerator / denominator as f64
}
