//! Parameter comparison, grouped by location.

use super::schema::diff_schemas;
use crate::diff::{ParameterDiff, ParametersDiff, ValueDiff};
use crate::model::{Parameter, ParameterLocation};
use std::collections::{BTreeMap, HashMap};

/// Compare the parameters of two operations.
///
/// `path_renames` maps revision path parameter names to base names, for
/// endpoints matched across differently named path templates.
pub fn diff_parameters(
    base: &[Parameter],
    revision: &[Parameter],
    path_renames: &HashMap<String, String>,
) -> ParametersDiff {
    let no_renames = HashMap::new();
    let base_index = index(base, &no_renames);
    let revision_index = index(revision, path_renames);
    let mut diff = ParametersDiff::default();

    for (&(location, name), base_param) in &base_index {
        match revision_index.get(&(location, name)) {
            Some(revision_param) => {
                let param_diff = diff_parameter(base_param, revision_param);
                if param_diff.is_empty() {
                    diff.unchanged.entry(location).or_default().push(name.to_string());
                } else {
                    diff.modified
                        .entry(location)
                        .or_default()
                        .insert(name.to_string(), param_diff);
                }
            }
            None => diff.deleted.entry(location).or_default().push(name.to_string()),
        }
    }

    for &(location, name) in revision_index.keys() {
        if !base_index.contains_key(&(location, name)) {
            diff.added.entry(location).or_default().push(name.to_string());
        }
    }

    diff
}

fn diff_parameter(base: &Parameter, revision: &Parameter) -> ParameterDiff {
    ParameterDiff {
        required: ValueDiff::compare(base.required, revision.required),
        schema: diff_schemas(base.schema.as_ref(), revision.schema.as_ref()),
    }
}

/// Index parameters by (location, name). The ordered map keeps output sorted.
fn index<'a>(
    parameters: &'a [Parameter],
    path_renames: &'a HashMap<String, String>,
) -> BTreeMap<(ParameterLocation, &'a str), &'a Parameter> {
    parameters
        .iter()
        .map(|p| {
            let name = match p.location {
                ParameterLocation::Path => path_renames
                    .get(&p.name)
                    .map_or(p.name.as_str(), String::as_str),
                _ => p.name.as_str(),
            };
            ((p.location, name), p)
        })
        .collect()
}
