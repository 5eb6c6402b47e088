//! Ratio primitive and modified-leaf dampening.

/// Fraction of a unit of distance charged for a modified element.
pub const COEFFICIENT_MODIFIED: f64 = 0.5;

/// Share of a modification attributed to one direction in asymmetric mode.
pub const ASYMMETRIC_DAMPENING: f64 = 0.5;

/// `(added + deleted + modified_contribution) / total`.
///
/// In asymmetric mode additions are ignored: only what the base lost or had
/// changed counts. `total` is the element count at this level and is at
/// least 1 whenever the enclosing record is non-empty; a zero total yields 0.
#[must_use]
pub fn ratio(
    asymmetric: bool,
    added: usize,
    deleted: usize,
    modified_contribution: f64,
    total: usize,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let added = if asymmetric { 0 } else { added };
    (added as f64 + deleted as f64 + modified_contribution) / total as f64
}

/// Halve a modification's contribution in asymmetric mode.
///
/// A modification is shared by both directions of a comparison, so each
/// direction is charged half of it.
#[must_use]
pub fn dampen(asymmetric: bool, magnitude: f64) -> f64 {
    if asymmetric {
        magnitude * ASYMMETRIC_DAMPENING
    } else {
        magnitude
    }
}

/// Contribution of `modified` elements at a leaf level.
#[must_use]
pub fn modified_contribution(asymmetric: bool, modified: usize) -> f64 {
    dampen(asymmetric, COEFFICIENT_MODIFIED * modified as f64)
}
