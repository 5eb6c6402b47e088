//! Schema-level delta.

use super::ratio::dampen;
use crate::diff::SchemaDiff;

/// Contribution of one modified schema.
///
/// Only type and format are scored. Other facets (nullability, pattern,
/// enum membership) are recorded by the differencer but not weighed here.
#[must_use]
pub fn schema_delta(asymmetric: bool, diff: &SchemaDiff) -> f64 {
    if diff.type_or_format_changed() {
        dampen(asymmetric, 1.0)
    } else {
        0.0
    }
}
