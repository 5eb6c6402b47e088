//! Response comparison, keyed by status code.

use super::schema::diff_schemas;
use crate::diff::{ContentDiff, ResponseDiff, ResponsesDiff, ValueDiff};
use crate::model::{Response, Schema};
use indexmap::IndexMap;

/// Compare the responses of two operations.
pub fn diff_responses(
    base: &IndexMap<String, Response>,
    revision: &IndexMap<String, Response>,
) -> ResponsesDiff {
    let mut diff = ResponsesDiff::default();

    for (status, base_response) in base {
        match revision.get(status) {
            Some(revision_response) => {
                let response_diff = diff_response(base_response, revision_response);
                if response_diff.is_empty() {
                    diff.unchanged.push(status.clone());
                } else {
                    diff.modified.insert(status.clone(), response_diff);
                }
            }
            None => diff.deleted.push(status.clone()),
        }
    }
    diff.added = revision
        .keys()
        .filter(|status| !base.contains_key(*status))
        .cloned()
        .collect();

    diff.added.sort();
    diff.deleted.sort();
    diff.unchanged.sort();
    diff
}

fn diff_response(base: &Response, revision: &Response) -> ResponseDiff {
    ResponseDiff {
        description: ValueDiff::compare(base.description.clone(), revision.description.clone()),
        content: diff_content(&base.content, &revision.content),
    }
}

fn diff_content(base: &IndexMap<String, Schema>, revision: &IndexMap<String, Schema>) -> ContentDiff {
    let mut diff = ContentDiff::default();

    for (media_type, base_schema) in base {
        match revision.get(media_type) {
            Some(revision_schema) => match diff_schemas(Some(base_schema), Some(revision_schema)) {
                Some(schema_diff) => {
                    diff.modified.insert(media_type.clone(), schema_diff);
                }
                None => diff.unchanged.push(media_type.clone()),
            },
            None => diff.deleted.push(media_type.clone()),
        }
    }
    diff.added = revision
        .keys()
        .filter(|media_type| !base.contains_key(*media_type))
        .cloned()
        .collect();

    diff.added.sort();
    diff.deleted.sort();
    diff.unchanged.sort();
    diff
}
