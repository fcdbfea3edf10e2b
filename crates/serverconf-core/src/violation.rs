//! # Violations
//!
//! Typed reasons for rejecting an addition or invalidating a configuration.
//!
//! The engine never produces display text for end users. Callers render a
//! `Violation` in whatever language they present; `Display` gives a neutral
//! English form for logs and diagnostics.

use crate::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxonomy tag of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    NotFound,
    AlreadySelected,
    IncompatiblePair,
    RuleViolation,
}

/// How a single rule was breached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "breach", rename_all = "snake_case")]
pub enum Breach {
    /// A required component is not selected.
    RequiredMissing { component: ComponentId },
    /// Two mutually exclusive components are both selected.
    Excluded {
        primary: ComponentId,
        secondary: ComponentId,
    },
    /// More copies selected than the rule allows.
    AboveMax {
        component: ComponentId,
        max: u32,
        count: usize,
    },
    /// Fewer copies selected than the rule demands.
    BelowMin {
        component: ComponentId,
        min: u32,
        count: usize,
    },
}

/// A reason why an operation was rejected or a configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The referenced component id is not in the catalog.
    NotFound { id: ComponentId },
    /// The component is already part of the configuration.
    AlreadySelected { id: ComponentId },
    /// `subject` has a compatibility entry that does not list `other`.
    IncompatiblePair {
        subject: ComponentId,
        other: ComponentId,
    },
    /// A declarative rule failed.
    RuleViolation { rule: String, breach: Breach },
}

impl Violation {
    /// Taxonomy tag of this violation.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::NotFound { .. } => ViolationKind::NotFound,
            Violation::AlreadySelected { .. } => ViolationKind::AlreadySelected,
            Violation::IncompatiblePair { .. } => ViolationKind::IncompatiblePair,
            Violation::RuleViolation { .. } => ViolationKind::RuleViolation,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotFound { id } => write!(f, "Component {id} not found"),
            Violation::AlreadySelected { id } => {
                write!(f, "Component {id} is already in configuration")
            }
            Violation::IncompatiblePair { subject, other } => {
                write!(f, "{subject} is not compatible with {other}")
            }
            Violation::RuleViolation { breach, .. } => match breach {
                Breach::RequiredMissing { component } => {
                    write!(f, "Required component {component} is missing")
                }
                Breach::Excluded { primary, secondary } => {
                    write!(f, "Components {primary} and {secondary} are incompatible")
                }
                Breach::AboveMax { component, max, .. } => {
                    write!(f, "Too many {component} components (max: {max})")
                }
                Breach::BelowMin { component, min, .. } => {
                    write!(f, "Not enough {component} components (min: {min})")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_reason_wording() {
        let v = Violation::IncompatiblePair {
            subject: "a".into(),
            other: "b".into(),
        };
        assert_eq!(v.to_string(), "a is not compatible with b");
        assert_eq!(v.kind(), ViolationKind::IncompatiblePair);

        let dup = Violation::AlreadySelected { id: "a".into() };
        assert!(dup.to_string().contains("already in configuration"));
    }

    #[test]
    fn rule_violations_share_one_kind() {
        let breaches = [
            Breach::RequiredMissing {
                component: "a".into(),
            },
            Breach::Excluded {
                primary: "a".into(),
                secondary: "b".into(),
            },
            Breach::AboveMax {
                component: "a".into(),
                max: 1,
                count: 2,
            },
            Breach::BelowMin {
                component: "a".into(),
                min: 2,
                count: 1,
            },
        ];
        for breach in breaches {
            let v = Violation::RuleViolation {
                rule: "r".to_string(),
                breach,
            };
            assert_eq!(v.kind(), ViolationKind::RuleViolation);
        }
    }
}
