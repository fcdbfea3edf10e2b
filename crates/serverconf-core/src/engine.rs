//! # Validation Engine
//!
//! Evaluates the compatibility table and the rule set against a candidate
//! addition or a whole selection.
//!
//! All checks are:
//! - Pure (no mutation, no side effects)
//! - Total (ids unknown to the catalog mean "does not apply")
//! - Exhaustive (every failing check is reported, none short-circuits,
//!   except the duplicate check on addition)

use crate::inventory::Inventory;
use crate::selection::Selection;
use crate::violation::Violation;
use crate::Component;

/// Borrowing view over an [`Inventory`] that answers validation questions.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a> {
    inventory: &'a Inventory,
}

impl<'a> ValidationEngine<'a> {
    /// Create an engine over `inventory`.
    #[must_use]
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Decide whether `candidate` may be added to `selection`.
    ///
    /// Returns an empty list when the addition is acceptable. Otherwise:
    /// 1. a duplicate yields only `AlreadySelected`;
    /// 2. pairwise violations come first, from the candidate's own entry and
    ///    then from each selected component's entry;
    /// 3. rule violations of the hypothetical selection follow.
    #[must_use]
    pub fn check_addition(&self, candidate: &Component, selection: &Selection) -> Vec<Violation> {
        let id = candidate.id.as_str();
        if selection.contains(candidate.component_type, id) {
            return vec![Violation::AlreadySelected {
                id: candidate.id.clone(),
            }];
        }

        let table = self.inventory.compatibility();
        let mut violations = Vec::new();

        if table.has_entry(id) {
            let allowed = table.compatible_ids(id);
            for (_, existing) in selection.iter() {
                if !allowed.contains(existing) {
                    violations.push(Violation::IncompatiblePair {
                        subject: candidate.id.clone(),
                        other: existing.clone(),
                    });
                }
            }
        }

        for (_, existing) in selection.iter() {
            if !table.permits(existing.as_str(), id) {
                violations.push(Violation::IncompatiblePair {
                    subject: existing.clone(),
                    other: candidate.id.clone(),
                });
            }
        }

        let hypothetical = selection.with_appended(candidate.component_type, candidate.id.clone());
        violations.extend(
            self.inventory
                .rules()
                .evaluate(self.inventory.catalog(), &hypothetical),
        );

        violations
    }

    /// Evaluate every rule against `selection` as-is.
    ///
    /// Pairwise compatibility is not re-checked here: it is enforced when a
    /// component is added. Use [`Self::pairwise_violations`] for selections
    /// assembled any other way.
    #[must_use]
    pub fn validate_configuration(&self, selection: &Selection) -> Vec<Violation> {
        self.inventory
            .rules()
            .evaluate(self.inventory.catalog(), selection)
    }

    /// Check every ordered pair of selected components against the table.
    #[must_use]
    pub fn pairwise_violations(&self, selection: &Selection) -> Vec<Violation> {
        let table = self.inventory.compatibility();
        let selected: Vec<_> = selection.iter().map(|(_, id)| id).collect();
        let mut violations = Vec::new();

        for (i, subject) in selected.iter().enumerate() {
            for (j, other) in selected.iter().enumerate() {
                if i != j && !table.permits(subject.as_str(), other.as_str()) {
                    violations.push(Violation::IncompatiblePair {
                        subject: (*subject).clone(),
                        other: (*other).clone(),
                    });
                }
            }
        }
        violations
    }
}

// =============================================================================
// TESTS
// =============================================================================
