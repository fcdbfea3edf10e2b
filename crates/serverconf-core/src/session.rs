//! # Session Module
//!
//! A configuration session: the mutable selection plus a shared, read-only
//! inventory.
//!
//! - Every mutation goes through the validation engine first
//! - A rejected addition leaves the selection untouched
//! - Snapshots are computed fresh on each call, never cached
//!
//! A `Session` has no internal locking. Share the `Arc<Inventory>` freely;
//! guard each session separately if it is reached from several threads.

use crate::engine::ValidationEngine;
use crate::inventory::Inventory;
use crate::selection::Selection;
use crate::violation::Violation;
use crate::{CompatibilityInfo, Component, ComponentId, ComponentType, Price};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Outcome of [`Session::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addition {
    pub accepted: bool,
    pub violations: Vec<Violation>,
}

impl Addition {
    fn accepted() -> Self {
        Self {
            accepted: true,
            violations: Vec::new(),
        }
    }

    fn rejected(violations: Vec<Violation>) -> Self {
        Self {
            accepted: false,
            violations,
        }
    }
}

/// Fully computed, read-only view of a session's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Sequence number of the configuration within its session.
    pub number: u64,
    /// Selected components per type; empty types are omitted.
    pub components: BTreeMap<ComponentType, Vec<Component>>,
    /// Sum of prices, absent prices counted as zero.
    pub total_price: Price,
    pub is_valid: bool,
    pub validation_errors: Vec<Violation>,
}

impl Configuration {
    /// Stable label: `config_<number>`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("config_{}", self.number)
    }

    /// Total number of selected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.values().map(Vec::len).sum()
    }

    /// Every selected component with its type, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentType, &Component)> + '_ {
        self.components
            .iter()
            .flat_map(|(t, list)| list.iter().map(move |c| (*t, c)))
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A mutable configuration bound to a shared inventory.
#[derive(Debug, Clone)]
pub struct Session {
    inventory: Arc<Inventory>,
    selection: Selection,
    number: u64,
}

impl Session {
    /// Create an empty session; the first configuration is number 1.
    #[must_use]
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self {
            inventory,
            selection: Selection::new(),
            number: 1,
        }
    }

    /// The shared inventory.
    #[must_use]
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current configuration number.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    fn engine(&self) -> ValidationEngine<'_> {
        ValidationEngine::new(&self.inventory)
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Try to add a component by id.
    ///
    /// Nothing changes unless every check passes.
    pub fn add(&mut self, id: &str) -> Addition {
        let Some(component) = self.inventory.catalog().get(id) else {
            return Addition::rejected(vec![Violation::NotFound { id: id.into() }]);
        };

        let violations = self.engine().check_addition(component, &self.selection);
        if !violations.is_empty() {
            return Addition::rejected(violations);
        }

        let (component_type, component_id) = (component.component_type, component.id.clone());
        self.selection.insert(component_type, component_id);
        Addition::accepted()
    }

    /// Remove the first selected component with this id.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    /// Empty the selection and move on to the next configuration number.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.number = self.number.saturating_add(1);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Compute a fresh snapshot of the configuration.
    #[must_use]
    pub fn snapshot(&self) -> Configuration {
        let catalog = self.inventory.catalog();
        let mut components: BTreeMap<ComponentType, Vec<Component>> = BTreeMap::new();

        for (component_type, id) in self.selection.iter() {
            if let Some(component) = catalog.get(id.as_str()) {
                components
                    .entry(component_type)
                    .or_default()
                    .push(component.clone());
            }
        }

        let total_price = components
            .values()
            .flatten()
            .map(Component::effective_price)
            .sum();
        let validation_errors = self.engine().validate_configuration(&self.selection);

        Configuration {
            number: self.number,
            components,
            total_price,
            is_valid: validation_errors.is_empty(),
            validation_errors,
        }
    }

    /// Components of a type that could be added right now.
    #[must_use]
    pub fn available_components(&self, component_type: ComponentType) -> Vec<&Component> {
        let engine = self.engine();
        self.inventory
            .catalog()
            .list_by_type(component_type)
            .into_iter()
            .filter(|c| engine.check_addition(c, &self.selection).is_empty())
            .collect()
    }

    /// Look up a catalog component.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.inventory.catalog().get(id)
    }

    /// Text search over the catalog.
    #[must_use]
    pub fn search(&self, query: &str, component_type: Option<ComponentType>) -> Vec<&Component> {
        self.inventory.catalog().search(query, component_type)
    }

    /// Compatibility overview of a component.
    #[must_use]
    pub fn compatibility_info(&self, id: &str) -> CompatibilityInfo {
        self.inventory.compatibility().info(id)
    }

    /// Whether a component is currently selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.selection.contains_anywhere(id)
    }

    /// Number of selected components.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Ids of the selected components, in display order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ComponentId> {
        self.selection.iter().map(|(_, id)| id.clone()).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
