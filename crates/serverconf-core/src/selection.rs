//! # Selection
//!
//! The mutable working set of a configuration: per type, the ordered list of
//! selected component ids.
//!
//! A selection stores ids only. Component data is always resolved through
//! the catalog, so a selection can never hold a stale copy.

use crate::{ComponentId, ComponentType};
use std::collections::BTreeMap;

/// Selected component ids, grouped by type.
///
/// Invariant: a type list never holds the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    lists: BTreeMap<ComponentType, Vec<ComponentId>>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the list for `component_type`.
    ///
    /// Returns `false` and leaves the selection untouched when the id is
    /// already in that list.
    pub fn insert(&mut self, component_type: ComponentType, id: ComponentId) -> bool {
        let list = self.lists.entry(component_type).or_default();
        if list.contains(&id) {
            return false;
        }
        list.push(id);
        true
    }

    /// Remove the first occurrence of `id`, scanning types in display order.
    pub fn remove(&mut self, id: &str) -> bool {
        for list in self.lists.values_mut() {
            if let Some(pos) = list.iter().position(|c| c.as_str() == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Whether `id` is selected under `component_type`.
    #[must_use]
    pub fn contains(&self, component_type: ComponentType, id: &str) -> bool {
        self.count(component_type, id) > 0
    }

    /// Whether `id` is selected under any type.
    #[must_use]
    pub fn contains_anywhere(&self, id: &str) -> bool {
        self.lists
            .values()
            .any(|list| list.iter().any(|c| c.as_str() == id))
    }

    /// Number of occurrences of `id` under `component_type`.
    #[must_use]
    pub fn count(&self, component_type: ComponentType, id: &str) -> usize {
        self.list(component_type)
            .iter()
            .filter(|c| c.as_str() == id)
            .count()
    }

    /// The ordered list for one type.
    #[must_use]
    pub fn list(&self, component_type: ComponentType) -> &[ComponentId] {
        self.lists
            .get(&component_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty type lists, in display order.
    pub fn groups(&self) -> impl Iterator<Item = (ComponentType, &[ComponentId])> + '_ {
        self.lists
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(t, list)| (*t, list.as_slice()))
    }

    /// Every selected id with its type, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentType, &ComponentId)> + '_ {
        self.groups()
            .flat_map(|(t, list)| list.iter().map(move |id| (t, id)))
    }

    /// Total number of selected components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Check whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this selection with `id` appended under `component_type`.
    ///
    /// Used to evaluate rules against a hypothetical addition. The id is
    /// appended even when already present.
    #[must_use]
    pub(crate) fn with_appended(&self, component_type: ComponentType, id: ComponentId) -> Self {
        let mut next = self.clone();
        next.lists.entry(component_type).or_default().push(id);
        next
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.insert(ComponentType::Memory, "a".into()));
        assert!(!selection.insert(ComponentType::Memory, "a".into()));
        assert_eq!(selection.count(ComponentType::Memory, "a"), 1);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn remove_takes_first_match() {
        let mut selection = Selection::new();
        selection.insert(ComponentType::Server, "s".into());
        selection.insert(ComponentType::Memory, "m".into());

        assert!(selection.remove("m"));
        assert!(!selection.remove("m"));
        assert!(!selection.contains_anywhere("m"));
        assert!(selection.contains(ComponentType::Server, "s"));
    }

    #[test]
    fn iter_is_in_display_order() {
        let mut selection = Selection::new();
        selection.insert(ComponentType::PowerSupply, "psu".into());
        selection.insert(ComponentType::Server, "srv".into());
        selection.insert(ComponentType::Memory, "m1".into());
        selection.insert(ComponentType::Memory, "m0".into());

        let ids: Vec<_> = selection.iter().map(|(_, id)| id.as_str()).collect();
        assert_eq!(ids, vec!["srv", "m1", "m0", "psu"]);
    }

    #[test]
    fn groups_skip_emptied_lists() {
        let mut selection = Selection::new();
        selection.insert(ComponentType::Memory, "m".into());
        selection.remove("m");
        assert_eq!(selection.groups().count(), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn with_appended_leaves_original_untouched() {
        let mut selection = Selection::new();
        selection.insert(ComponentType::Memory, "m".into());

        let hypothetical = selection.with_appended(ComponentType::Memory, "m".into());
        assert_eq!(hypothetical.count(ComponentType::Memory, "m"), 2);
        assert_eq!(selection.count(ComponentType::Memory, "m"), 1);
    }
}
