//! Endpoint pairing and per-operation comparison.

use super::{diff_parameters, diff_responses};
use crate::diff::paths::{normalize_template, param_renames, strip_prefix};
use crate::diff::{DiffOptions, EndpointsDiff, MethodDiff, ValueDiff};
use crate::model::{ApiSpec, EndpointKey, HttpMethod, Operation};
use indexmap::IndexMap;
use regex::Regex;

/// Key two endpoints are paired on: method plus the comparable path.
type MatchKey = (HttpMethod, String);

/// One side's endpoint as seen by the pairing step.
struct Candidate<'a> {
    key: &'a EndpointKey,
    /// Path after prefix stripping, before template normalization
    path: String,
    operation: &'a Operation,
}

/// Computes the endpoint-level record between two documents.
pub struct EndpointChangeComputer<'a> {
    options: &'a DiffOptions,
    path_filter: Option<&'a Regex>,
}

impl<'a> EndpointChangeComputer<'a> {
    #[must_use]
    pub const fn new(options: &'a DiffOptions, path_filter: Option<&'a Regex>) -> Self {
        Self {
            options,
            path_filter,
        }
    }

    /// Pair endpoints and compare each pair.
    ///
    /// Modified and unchanged entries are keyed by the base document's
    /// endpoint key; added entries by the revision's.
    pub fn compute(&self, base: &ApiSpec, revision: &ApiSpec) -> EndpointsDiff {
        let base_index = self.index(base, self.options.strip_prefix_base.as_deref());
        let revision_index = self.index(revision, self.options.strip_prefix_revision.as_deref());
        let mut diff = EndpointsDiff::default();

        for (match_key, base_entry) in &base_index {
            let Some(revision_entry) = revision_index.get(match_key) else {
                diff.deleted.push(base_entry.key.clone());
                continue;
            };

            let method_diff = diff_operation(base_entry, revision_entry);
            if method_diff.has_changes() {
                diff.modified.insert(base_entry.key.clone(), method_diff);
            } else {
                diff.unchanged.push(base_entry.key.clone());
            }
        }

        diff.added = revision_index
            .iter()
            .filter(|(match_key, _)| !base_index.contains_key(*match_key))
            .map(|(_, entry)| entry.key.clone())
            .collect();

        diff.added.sort();
        diff.deleted.sort();
        diff.unchanged.sort();
        diff
    }

    fn index<'s>(
        &self,
        spec: &'s ApiSpec,
        prefix: Option<&str>,
    ) -> IndexMap<MatchKey, Candidate<'s>> {
        let mut index = IndexMap::with_capacity(spec.endpoint_count());

        for (key, operation) in &spec.endpoints {
            let path = strip_prefix(&key.path, prefix).into_owned();
            if let Some(filter) = self.path_filter {
                if !filter.is_match(&path) {
                    continue;
                }
            }

            let comparable = if self.options.normalize_path_params {
                normalize_template(&path)
            } else {
                path.clone()
            };

            let match_key = (key.method, comparable);
            if index.contains_key(&match_key) {
                tracing::debug!("Skipping {key}: another endpoint has the same template");
                continue;
            }
            index.insert(
                match_key,
                Candidate {
                    key,
                    path,
                    operation,
                },
            );
        }
        index
    }
}

fn diff_operation(base: &Candidate<'_>, revision: &Candidate<'_>) -> MethodDiff {
    let renames = param_renames(&base.path, &revision.path);
    let (base_op, revision_op) = (base.operation, revision.operation);

    MethodDiff {
        operation_id: ValueDiff::compare(
            base_op.operation_id.clone(),
            revision_op.operation_id.clone(),
        ),
        summary: ValueDiff::compare(base_op.summary.clone(), revision_op.summary.clone()),
        deprecated: ValueDiff::compare(base_op.deprecated, revision_op.deprecated),
        parameters: diff_parameters(&base_op.parameters, &revision_op.parameters, &renames),
        responses: diff_responses(&base_op.responses, &revision_op.responses),
    }
}
