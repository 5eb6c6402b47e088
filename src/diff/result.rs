//! Diff record structures.
//!
//! The record is hierarchical: endpoints, then per-endpoint parameters (by
//! location) and responses (by status code), then schemas. Modified
//! collections are ordered maps so every walk over the record visits
//! entries in the same order regardless of either document's layout.

use super::traits::{ChangeCounts, DiffNode};
use crate::model::{EndpointKey, ParameterLocation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar that differs between base and revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDiff<T> {
    pub from: T,
    pub to: T,
}

impl<T: PartialEq> ValueDiff<T> {
    /// `Some` when the two values differ.
    pub fn compare(from: T, to: T) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }
}

/// Complete diff between two API documents.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct SpecDiff {
    pub endpoints: EndpointsDiff,
}

impl SpecDiff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiffNode for SpecDiff {
    fn counts(&self) -> ChangeCounts {
        self.endpoints.counts()
    }
}

/// Endpoint-level diff, keyed by (path, method).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointsDiff {
    pub added: Vec<EndpointKey>,
    pub deleted: Vec<EndpointKey>,
    pub modified: BTreeMap<EndpointKey, MethodDiff>,
    pub unchanged: Vec<EndpointKey>,
}

impl DiffNode for EndpointsDiff {
    fn counts(&self) -> ChangeCounts {
        ChangeCounts::new(
            self.added.len(),
            self.deleted.len(),
            self.modified.len(),
            self.unchanged.len(),
        )
    }
}

/// Diff of one operation present in both documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDiff {
    pub operation_id: Option<ValueDiff<Option<String>>>,
    pub summary: Option<ValueDiff<Option<String>>>,
    pub deprecated: Option<ValueDiff<bool>>,
    pub parameters: ParametersDiff,
    pub responses: ResponsesDiff,
}

impl MethodDiff {
    /// True when anything about the operation differs.
    ///
    /// Unchanged-only sub-records are not changes.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.operation_id.is_some()
            || self.summary.is_some()
            || self.deprecated.is_some()
            || self.parameters.has_changes()
            || self.responses.has_changes()
    }
}

/// Parameter names grouped by location.
pub type NamesByLocation = BTreeMap<ParameterLocation, Vec<String>>;

/// Parameter diff of one operation, grouped by location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParametersDiff {
    pub added: NamesByLocation,
    pub deleted: NamesByLocation,
    pub modified: BTreeMap<ParameterLocation, BTreeMap<String, ParameterDiff>>,
    pub unchanged: NamesByLocation,
}

impl ParametersDiff {
    /// Counts for a single location.
    #[must_use]
    pub fn location_counts(&self, location: ParameterLocation) -> ChangeCounts {
        ChangeCounts::new(
            self.added.get(&location).map_or(0, Vec::len),
            self.deleted.get(&location).map_or(0, Vec::len),
            self.modified.get(&location).map_or(0, BTreeMap::len),
            self.unchanged.get(&location).map_or(0, Vec::len),
        )
    }

    /// Modified parameters across all locations, in location then name order.
    pub fn modified_iter(&self) -> impl Iterator<Item = (ParameterLocation, &str, &ParameterDiff)> {
        self.modified.iter().flat_map(|(location, by_name)| {
            by_name
                .iter()
                .map(move |(name, diff)| (*location, name.as_str(), diff))
        })
    }
}

impl DiffNode for ParametersDiff {
    fn counts(&self) -> ChangeCounts {
        ParameterLocation::ALL
            .into_iter()
            .map(|location| self.location_counts(location))
            .sum()
    }
}

/// Diff of one parameter present in both operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDiff {
    pub required: Option<ValueDiff<bool>>,
    pub schema: Option<SchemaDiff>,
}

impl ParameterDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_none() && self.schema.is_none()
    }
}

/// Response diff of one operation, keyed by status code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsesDiff {
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub modified: BTreeMap<String, ResponseDiff>,
    pub unchanged: Vec<String>,
}

impl DiffNode for ResponsesDiff {
    fn counts(&self) -> ChangeCounts {
        ChangeCounts::new(
            self.added.len(),
            self.deleted.len(),
            self.modified.len(),
            self.unchanged.len(),
        )
    }
}

/// Diff of one response present in both operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseDiff {
    pub description: Option<ValueDiff<Option<String>>>,
    pub content: ContentDiff,
}

impl ResponseDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && !self.content.has_changes()
    }
}

/// Media-type diff of one response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDiff {
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub modified: BTreeMap<String, SchemaDiff>,
    pub unchanged: Vec<String>,
}

impl DiffNode for ContentDiff {
    fn counts(&self) -> ChangeCounts {
        ChangeCounts::new(
            self.added.len(),
            self.deleted.len(),
            self.modified.len(),
            self.unchanged.len(),
        )
    }
}

/// Diff of the tracked schema facets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDiff {
    pub schema_type: Option<ValueDiff<Option<String>>>,
    pub format: Option<ValueDiff<Option<String>>>,
    pub nullable: Option<ValueDiff<bool>>,
    pub pattern: Option<ValueDiff<Option<String>>>,
    pub enum_added: Vec<String>,
    pub enum_deleted: Vec<String>,
}

impl SchemaDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schema_type.is_none()
            && self.format.is_none()
            && self.nullable.is_none()
            && self.pattern.is_none()
            && self.enum_added.is_empty()
            && self.enum_deleted.is_empty()
    }

    /// True when the type or the format differs.
    #[must_use]
    pub const fn type_or_format_changed(&self) -> bool {
        self.schema_type.is_some() || self.format.is_some()
    }
}
