//! # Inventory
//!
//! The read-only bundle the engine works against: catalog, compatibility
//! table and rule set. Loaded once, then shared by any number of sessions
//! through `Arc<Inventory>`.

use crate::catalog::Catalog;
use crate::compat::CompatibilityTable;
use crate::rules::{RuleLint, RuleSet};

/// Catalog, compatibility table and rules, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    catalog: Catalog,
    compatibility: CompatibilityTable,
    rules: RuleSet,
}

impl Inventory {
    /// Bundle the three read-only stores.
    #[must_use]
    pub fn new(catalog: Catalog, compatibility: CompatibilityTable, rules: RuleSet) -> Self {
        Self {
            catalog,
            compatibility,
            rules,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn compatibility(&self) -> &CompatibilityTable {
        &self.compatibility
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rules that can never fire as written.
    #[must_use]
    pub fn lint(&self) -> Vec<RuleLint> {
        self.rules.lint(&self.catalog)
    }
}
