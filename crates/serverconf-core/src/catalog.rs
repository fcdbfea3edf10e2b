//! # Catalog
//!
//! Read-only store of every known component, keyed by id and grouped by type.
//!
//! The catalog is the single source of truth for id → component resolution.
//! Selections, snapshots and rules refer to components by id and resolve
//! them here.

use crate::{Component, ComponentId, ComponentType, ConfiguratorError};
use std::collections::BTreeMap;

/// Component store with per-type insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: BTreeMap<ComponentId, Component>,
    by_type: BTreeMap<ComponentType, Vec<ComponentId>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component at load time.
    ///
    /// Re-inserting an id replaces the stored component and keeps its
    /// position in the type listing. Changing the type of an existing id is
    /// rejected.
    pub fn insert(&mut self, component: Component) -> Result<(), ConfiguratorError> {
        if let Some(existing) = self.components.get(&component.id) {
            if existing.component_type != component.component_type {
                return Err(ConfiguratorError::DuplicateComponent(component.id));
            }
        } else {
            self.by_type
                .entry(component.component_type)
                .or_default()
                .push(component.id.clone());
        }
        self.components.insert(component.id.clone(), component);
        Ok(())
    }

    /// Look up a component by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Check whether the catalog knows an id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    /// All components of one type, in insertion order.
    #[must_use]
    pub fn list_by_type(&self, component_type: ComponentType) -> Vec<&Component> {
        self.by_type
            .get(&component_type)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.components.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Types that have at least one component, in display order.
    pub fn types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.by_type
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(t, _)| *t)
    }

    /// Every component, grouped by type in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> + '_ {
        self.by_type
            .values()
            .flatten()
            .filter_map(|id| self.components.get(id))
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Case-insensitive text search over name, manufacturer and model.
    ///
    /// An empty query matches everything (subject to the type filter).
    #[must_use]
    pub fn search(&self, query: &str, component_type: Option<ComponentType>) -> Vec<&Component> {
        let needle = query.trim().to_lowercase();
        self.iter()
            .filter(|c| component_type.is_none_or(|t| c.component_type == t))
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.manufacturer.to_lowercase().contains(&needle)
                    || c.model.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, t: ComponentType, manufacturer: &str) -> Component {
        Component::new(id, id.to_uppercase(), t, manufacturer, format!("{id}-model"))
    }

    #[test]
    fn list_by_type_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        catalog
            .insert(part("z", ComponentType::Memory, "A"))
            .expect("insert");
        catalog
            .insert(part("a", ComponentType::Memory, "A"))
            .expect("insert");
        catalog
            .insert(part("m", ComponentType::Server, "A"))
            .expect("insert");

        let ids: Vec<_> = catalog
            .list_by_type(ComponentType::Memory)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert!(catalog.list_by_type(ComponentType::Nvme).is_empty());
    }

    #[test]
    fn iter_groups_by_type_in_display_order() {
        let mut catalog = Catalog::new();
        catalog
            .insert(part("psu", ComponentType::PowerSupply, "A"))
            .expect("insert");
        catalog
            .insert(part("srv", ComponentType::Server, "A"))
            .expect("insert");

        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["srv", "psu"]);
        let types: Vec<_> = catalog.types().collect();
        assert_eq!(types, vec![ComponentType::Server, ComponentType::PowerSupply]);
    }

    #[test]
    fn reinsert_same_type_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog
            .insert(part("a", ComponentType::Memory, "Old"))
            .expect("insert");
        catalog
            .insert(part("a", ComponentType::Memory, "New"))
            .expect("insert");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list_by_type(ComponentType::Memory).len(), 1);
        assert_eq!(catalog.get("a").map(|c| c.manufacturer.as_str()), Some("New"));
    }

    #[test]
    fn reinsert_with_other_type_is_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .insert(part("a", ComponentType::Memory, "A"))
            .expect("insert");
        let result = catalog.insert(part("a", ComponentType::Server, "A"));
        assert!(matches!(
            result,
            Err(ConfiguratorError::DuplicateComponent(_))
        ));
    }

    #[test]
    fn missing_id_is_absence() {
        let catalog = Catalog::new();
        assert!(catalog.get("nope").is_none());
        assert!(!catalog.contains("nope"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn search_matches_name_manufacturer_and_model() {
        let mut catalog = Catalog::new();
        catalog
            .insert(part("xeon", ComponentType::Processor, "Intel"))
            .expect("insert");
        catalog
            .insert(part("dimm", ComponentType::Memory, "Kingston"))
            .expect("insert");

        assert_eq!(catalog.search("intel", None).len(), 1);
        assert_eq!(catalog.search("DIMM-MODEL", None).len(), 1);
        assert_eq!(catalog.search("", None).len(), 2);
        assert!(catalog
            .search("intel", Some(ComponentType::Memory))
            .is_empty());
    }
}
