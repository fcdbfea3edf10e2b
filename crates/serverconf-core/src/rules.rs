//! # Rule Set
//!
//! Declarative constraints evaluated against a selection.
//!
//! Every rule contributes its own violations; evaluation is a conjunction of
//! independent checks and never short-circuits. Rules that reference ids
//! unknown to the catalog do not apply.

use crate::catalog::Catalog;
use crate::selection::Selection;
use crate::violation::{Breach, Violation};
use crate::ComponentId;
use serde::{Deserialize, Serialize};

// =============================================================================
// RULES
// =============================================================================

/// What a rule constrains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// `primary` must be selected under its catalog type.
    Required { primary: ComponentId },
    /// `primary` and `secondary` must not both be selected.
    ///
    /// Not symmetric by inference: declare both directions if wanted.
    Excluded {
        primary: ComponentId,
        secondary: ComponentId,
    },
    /// Bounds on how many copies of `primary` are selected.
    ///
    /// A bound of zero is ignored.
    Limited {
        primary: ComponentId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
}

/// A named rule with an optional human note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Free text for diagnostics; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Rule {
    #[must_use]
    pub fn required(id: impl Into<String>, primary: impl Into<ComponentId>) -> Self {
        Self::new(
            id,
            RuleKind::Required {
                primary: primary.into(),
            },
        )
    }

    #[must_use]
    pub fn excluded(
        id: impl Into<String>,
        primary: impl Into<ComponentId>,
        secondary: impl Into<ComponentId>,
    ) -> Self {
        Self::new(
            id,
            RuleKind::Excluded {
                primary: primary.into(),
                secondary: secondary.into(),
            },
        )
    }

    #[must_use]
    pub fn limited(
        id: impl Into<String>,
        primary: impl Into<ComponentId>,
        min: Option<u32>,
        max: Option<u32>,
    ) -> Self {
        Self::new(
            id,
            RuleKind::Limited {
                primary: primary.into(),
                min,
                max,
            },
        )
    }

    fn new(id: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            condition: None,
        }
    }

    /// Attach a diagnostic note.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Component ids this rule refers to.
    #[must_use]
    pub fn referenced_ids(&self) -> Vec<&ComponentId> {
        match &self.kind {
            RuleKind::Required { primary } | RuleKind::Limited { primary, .. } => vec![primary],
            RuleKind::Excluded { primary, secondary } => vec![primary, secondary],
        }
    }

    /// Evaluate this rule alone, appending violations to `out`.
    fn check(&self, catalog: &Catalog, selection: &Selection, out: &mut Vec<Violation>) {
        let violation = |breach| Violation::RuleViolation {
            rule: self.id.clone(),
            breach,
        };

        match &self.kind {
            RuleKind::Required { primary } => {
                let Some(component) = catalog.get(primary.as_str()) else {
                    return;
                };
                if !selection.contains(component.component_type, primary.as_str()) {
                    out.push(violation(Breach::RequiredMissing {
                        component: primary.clone(),
                    }));
                }
            }

            RuleKind::Excluded { primary, secondary } => {
                let (Some(first), Some(second)) = (
                    catalog.get(primary.as_str()),
                    catalog.get(secondary.as_str()),
                ) else {
                    return;
                };
                if selection.contains(first.component_type, primary.as_str())
                    && selection.contains(second.component_type, secondary.as_str())
                {
                    out.push(violation(Breach::Excluded {
                        primary: primary.clone(),
                        secondary: secondary.clone(),
                    }));
                }
            }

            RuleKind::Limited { primary, min, max } => {
                let Some(component) = catalog.get(primary.as_str()) else {
                    return;
                };
                let count = selection.count(component.component_type, primary.as_str());

                if let Some(max) = max.filter(|m| *m > 0) {
                    if count > max as usize {
                        out.push(violation(Breach::AboveMax {
                            component: primary.clone(),
                            max,
                            count,
                        }));
                    }
                }
                if let Some(min) = min.filter(|m| *m > 0) {
                    if count < min as usize {
                        out.push(violation(Breach::BelowMin {
                            component: primary.clone(),
                            min,
                            count,
                        }));
                    }
                }
            }
        }
    }
}

// =============================================================================
// LOAD-TIME DIAGNOSTICS
// =============================================================================

/// A finding about a rule that can never fire as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "lint", rename_all = "snake_case")]
pub enum RuleLint {
    /// The rule names an id the catalog does not contain.
    UnknownComponent { rule: String, component: ComponentId },
    /// `max > 1` cannot be reached because duplicate additions are rejected.
    UnreachableLimit {
        rule: String,
        component: ComponentId,
        max: u32,
    },
    /// A bound of zero is treated as absent.
    ZeroBound { rule: String },
}

impl std::fmt::Display for RuleLint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleLint::UnknownComponent { rule, component } => {
                write!(f, "rule {rule} references unknown component {component}")
            }
            RuleLint::UnreachableLimit {
                rule,
                component,
                max,
            } => write!(
                f,
                "rule {rule} limits {component} to {max}, but a component can be selected at most once"
            ),
            RuleLint::ZeroBound { rule } => write!(f, "rule {rule} has a zero bound, which is ignored"),
        }
    }
}

// =============================================================================
// RULE SET
// =============================================================================

/// Ordered collection of rules. Order does not affect the violation set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at load time.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// All rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `selection` and collect all violations.
    #[must_use]
    pub fn evaluate(&self, catalog: &Catalog, selection: &Selection) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            rule.check(catalog, selection, &mut violations);
        }
        violations
    }

    /// Report rules that can never fire as written.
    #[must_use]
    pub fn lint(&self, catalog: &Catalog) -> Vec<RuleLint> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            for id in rule.referenced_ids() {
                if !catalog.contains(id.as_str()) {
                    findings.push(RuleLint::UnknownComponent {
                        rule: rule.id.clone(),
                        component: id.clone(),
                    });
                }
            }
            if let RuleKind::Limited { primary, min, max } = &rule.kind {
                if *min == Some(0) || *max == Some(0) {
                    findings.push(RuleLint::ZeroBound {
                        rule: rule.id.clone(),
                    });
                }
                if let Some(max) = max.filter(|m| *m > 1) {
                    findings.push(RuleLint::UnreachableLimit {
                        rule: rule.id.clone(),
                        component: primary.clone(),
                        max,
                    });
                }
            }
        }
        findings
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
