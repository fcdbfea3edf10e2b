//! # Compatibility Table
//!
//! Directed adjacency map: `id → {ids it is declared compatible with}`.
//!
//! The table is not assumed to be symmetric. An id without an entry imposes
//! no pairwise restriction from its own side; it is *not* incompatible with
//! everything.

use crate::ComponentId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Compatibility declarations, read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable {
    entries: BTreeMap<ComponentId, BTreeSet<ComponentId>>,
}

/// Compatibility overview of one component, as shown by `compat <id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInfo {
    /// Ids listed in the component's own entry.
    pub compatible_with: Vec<ComponentId>,
    /// Ids whose entries exist but do not list the component.
    pub incompatible_with: Vec<ComponentId>,
}

static EMPTY: BTreeSet<ComponentId> = BTreeSet::new();

impl CompatibilityTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `id` compatible with `ids`. Repeated declarations merge.
    pub fn declare<I, S>(&mut self, id: impl Into<ComponentId>, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentId>,
    {
        self.entries
            .entry(id.into())
            .or_default()
            .extend(ids.into_iter().map(Into::into));
    }

    /// Ids declared compatible with `id`; empty when `id` has no entry.
    #[must_use]
    pub fn compatible_ids(&self, id: &str) -> &BTreeSet<ComponentId> {
        self.entries.get(id).unwrap_or(&EMPTY)
    }

    /// Whether `id` has an entry at all.
    #[must_use]
    pub fn has_entry(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether `subject`'s entry, if any, permits `other`.
    ///
    /// Returns `true` when `subject` has no entry.
    #[must_use]
    pub fn permits(&self, subject: &str, other: &str) -> bool {
        self.entries
            .get(subject)
            .is_none_or(|allowed| allowed.contains(other))
    }

    /// Ids that have an entry.
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> + '_ {
        self.entries.keys()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compatibility overview of `id`.
    ///
    /// Without an entry for `id`, both lists are empty.
    #[must_use]
    pub fn info(&self, id: &str) -> CompatibilityInfo {
        let Some(own) = self.entries.get(id) else {
            return CompatibilityInfo::default();
        };

        let incompatible_with = self
            .entries
            .iter()
            .filter(|(other, allowed)| other.as_str() != id && !allowed.contains(id))
            .map(|(other, _)| other.clone())
            .collect();

        CompatibilityInfo {
            compatible_with: own.iter().cloned().collect(),
            incompatible_with,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entry_means_no_restriction() {
        let table = CompatibilityTable::new();
        assert!(table.compatible_ids("a").is_empty());
        assert!(!table.has_entry("a"));
        assert!(table.permits("a", "b"));
    }

    #[test]
    fn entries_are_directed() {
        let mut table = CompatibilityTable::new();
        table.declare("a", ["b"]);

        assert!(table.permits("a", "b"));
        assert!(!table.permits("a", "c"));
        // b has no entry: it restricts nothing
        assert!(table.permits("b", "a"));
    }

    #[test]
    fn declarations_merge() {
        let mut table = CompatibilityTable::new();
        table.declare("a", ["b"]);
        table.declare("a", ["c"]);
        assert_eq!(table.compatible_ids("a").len(), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn info_lists_entries_that_omit_the_component() {
        let mut table = CompatibilityTable::new();
        table.declare("srv", ["cpu"]);
        table.declare("cpu", ["srv"]);
        table.declare("other_srv", ["other_cpu"]);

        let info = table.info("srv");
        assert_eq!(info.compatible_with, vec![ComponentId::from("cpu")]);
        assert_eq!(info.incompatible_with, vec![ComponentId::from("other_srv")]);
    }

    #[test]
    fn info_without_entry_is_empty() {
        let mut table = CompatibilityTable::new();
        table.declare("srv", ["cpu"]);
        assert_eq!(table.info("cpu"), CompatibilityInfo::default());
    }
}
