//! Schema facet comparison.

use crate::diff::{SchemaDiff, ValueDiff};
use crate::model::Schema;

/// Compare two optional schemas. A missing schema compares as an empty one.
///
/// Returns `None` when no tracked facet differs.
pub fn diff_schemas(base: Option<&Schema>, revision: Option<&Schema>) -> Option<SchemaDiff> {
    let empty = Schema::default();
    let base = base.unwrap_or(&empty);
    let revision = revision.unwrap_or(&empty);

    let diff = SchemaDiff {
        schema_type: ValueDiff::compare(base.schema_type.clone(), revision.schema_type.clone()),
        format: ValueDiff::compare(base.format.clone(), revision.format.clone()),
        nullable: ValueDiff::compare(base.nullable, revision.nullable),
        pattern: ValueDiff::compare(base.pattern.clone(), revision.pattern.clone()),
        enum_added: missing_from(&revision.enum_values, &base.enum_values),
        enum_deleted: missing_from(&base.enum_values, &revision.enum_values),
    };
    (!diff.is_empty()).then_some(diff)
}

/// Members of `values` absent from `other`, sorted.
fn missing_from(values: &[String], other: &[String]) -> Vec<String> {
    let mut missing: Vec<String> = values
        .iter()
        .filter(|v| !other.contains(v))
        .cloned()
        .collect();
    missing.sort();
    missing.dedup();
    missing
}
