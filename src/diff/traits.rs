//! Trait definitions shared by every level of the diff record.
//!
//! Each level that tracks added/deleted/modified/unchanged collections
//! implements [`DiffNode`], which lets the scoring engine read counts
//! without knowing the concrete record type.

use serde::{Deserialize, Serialize};

/// Element counts at one level of a diff record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl ChangeCounts {
    #[must_use]
    pub const fn new(added: usize, deleted: usize, modified: usize, unchanged: usize) -> Self {
        Self {
            added,
            deleted,
            modified,
            unchanged,
        }
    }

    /// Number of elements compared at this level.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.deleted + self.modified + self.unchanged
    }

    /// Number of elements that differ.
    #[must_use]
    pub const fn changed(&self) -> usize {
        self.added + self.deleted + self.modified
    }

    /// True when nothing was compared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::ops::Add for ChangeCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.added + rhs.added,
            self.deleted + rhs.deleted,
            self.modified + rhs.modified,
            self.unchanged + rhs.unchanged,
        )
    }
}

impl std::iter::Sum for ChangeCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

/// A level of the diff record with added/deleted/modified/unchanged collections.
pub trait DiffNode {
    /// Counts at this level.
    fn counts(&self) -> ChangeCounts;

    /// True iff there was nothing to compare at or below this node.
    fn is_empty(&self) -> bool {
        self.counts().is_empty()
    }

    /// True when at least one element was added, deleted or modified.
    fn has_changes(&self) -> bool {
        self.counts().changed() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_totals() {
        let counts = ChangeCounts::new(1, 2, 3, 4);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.changed(), 6);
        assert!(!counts.is_empty());
        assert!(ChangeCounts::default().is_empty());
    }

    #[test]
    fn test_counts_sum() {
        let total: ChangeCounts = [ChangeCounts::new(1, 0, 0, 2), ChangeCounts::new(0, 1, 1, 0)]
            .into_iter()
            .sum();
        assert_eq!(total, ChangeCounts::new(1, 1, 1, 2));
    }
}
