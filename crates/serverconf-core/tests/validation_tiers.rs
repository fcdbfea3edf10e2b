//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the configurator accepts builds it must refuse.
//!
//! ## Tiers
//! - T0: Lookup and duplicate handling
//! - T1: Pairwise compatibility, both directions
//! - T2: Declarative rules
//! - T3: Session scenarios over the sample inventory

use serverconf_core::{
    Breach, Catalog, CompatibilityTable, Component, ComponentType, Inventory, Price, Rule,
    RuleLint, RuleSet, Session, Violation, ViolationKind, sample,
};
use std::sync::Arc;

fn fixture(table: CompatibilityTable, rules: RuleSet) -> Session {
    let mut catalog = Catalog::new();
    for (id, component_type, price) in [
        ("a", ComponentType::Server, 1000),
        ("b", ComponentType::Processor, 200),
        ("c", ComponentType::Memory, 50),
        ("d", ComponentType::PowerSupply, 120),
    ] {
        catalog
            .insert(
                Component::new(id, id.to_uppercase(), component_type, "Acme", id)
                    .with_price(Price::from_units(price)),
            )
            .expect("insert");
    }
    Session::new(Arc::new(Inventory::new(catalog, table, rules)))
}

fn standard_session() -> Session {
    Session::new(Arc::new(sample::standard().expect("standard dataset")))
}

// =============================================================================
// TIER T0: LOOKUP AND DUPLICATES
// =============================================================================

mod t0_lookup {
    use super::*;

    /// T0.1: Unknown ids are rejected with NotFound and change nothing.
    #[test]
    fn unknown_id_is_not_found() {
        let mut session = fixture(CompatibilityTable::new(), RuleSet::new());
        let outcome = session.add("nonexistent");

        assert!(!outcome.accepted);
        assert_eq!(
            outcome.violations,
            vec![Violation::NotFound {
                id: "nonexistent".into()
            }]
        );
        assert_eq!(session.selected_count(), 0);
    }

    /// T0.2: Duplicate additions are rejected, no matter how often.
    #[test]
    fn duplicate_rejection_is_idempotent() {
        let mut session = fixture(CompatibilityTable::new(), RuleSet::new());
        assert!(session.add("a").accepted);

        for _ in 0..5 {
            let outcome = session.add("a");
            assert!(!outcome.accepted);
            assert_eq!(outcome.violations.len(), 1);
            assert_eq!(outcome.violations[0].kind(), ViolationKind::AlreadySelected);
        }
        assert_eq!(session.selected_count(), 1);
    }

    /// T0.3: Ids keep their exact case.
    #[test]
    fn ids_are_case_sensitive() {
        let mut session = fixture(CompatibilityTable::new(), RuleSet::new());
        let outcome = session.add("A");
        assert_eq!(outcome.violations[0].kind(), ViolationKind::NotFound);
    }
}

// =============================================================================
// TIER T1: PAIRWISE COMPATIBILITY
// =============================================================================

mod t1_pairwise {
    use super::*;

    /// T1.1: A lists B, B has no entry: both orders succeed.
    #[test]
    fn one_sided_entry_that_lists_the_other_allows_both_orders() {
        let mut table = CompatibilityTable::new();
        table.declare("a", ["b"]);

        let mut forward = fixture(table.clone(), RuleSet::new());
        assert!(forward.add("a").accepted);
        assert!(forward.add("b").accepted);

        let mut backward = fixture(table, RuleSet::new());
        assert!(backward.add("b").accepted);
        assert!(backward.add("a").accepted);
    }

    /// T1.2: B's entry omits A: A after B and B after A both fail, with B as
    /// the subject.
    #[test]
    fn omission_blocks_both_orders() {
        let mut table = CompatibilityTable::new();
        table.declare("a", ["b"]);
        table.declare("b", ["c"]);
        let expected = vec![Violation::IncompatiblePair {
            subject: "b".into(),
            other: "a".into(),
        }];

        let mut b_first = fixture(table.clone(), RuleSet::new());
        assert!(b_first.add("b").accepted);
        let outcome = b_first.add("a");
        assert!(!outcome.accepted);
        assert_eq!(outcome.violations, expected);

        let mut a_first = fixture(table, RuleSet::new());
        assert!(a_first.add("a").accepted);
        let outcome = a_first.add("b");
        assert!(!outcome.accepted);
        assert_eq!(outcome.violations, expected);
    }

    /// T1.3: An entry with no ids rejects everything else.
    #[test]
    fn empty_entry_rejects_all_partners() {
        let mut table = CompatibilityTable::new();
        table.declare("a", Vec::<&str>::new());

        let mut session = fixture(table, RuleSet::new());
        assert!(session.add("b").accepted);
        let outcome = session.add("a");
        assert_eq!(
            outcome.violations,
            vec![Violation::IncompatiblePair {
                subject: "a".into(),
                other: "b".into()
            }]
        );
    }

    /// T1.4: Components without entries are unrestricted.
    #[test]
    fn no_entries_no_restrictions() {
        let mut session = fixture(CompatibilityTable::new(), RuleSet::new());
        for id in ["a", "b", "c", "d"] {
            assert!(session.add(id).accepted, "{id}");
        }
        assert!(session.snapshot().is_valid);
    }
}

// =============================================================================
// TIER T2: RULES
// =============================================================================

mod t2_rules {
    use super::*;

    /// T2.1: Two violated rules are both reported.
    #[test]
    fn rules_are_independent() {
        let rules: RuleSet = [Rule::required("need_c", "c"), Rule::required("need_d", "d")]
            .into_iter()
            .collect();
        let mut session = fixture(CompatibilityTable::new(), rules);

        let snapshot = session.snapshot();
        assert!(!snapshot.is_valid);
        assert_eq!(snapshot.validation_errors.len(), 2);

        // Adding c alone still leaves need_d unmet, so it is refused.
        let outcome = session.add("c");
        assert!(!outcome.accepted);
        assert_eq!(
            outcome.violations,
            vec![Violation::RuleViolation {
                rule: "need_d".into(),
                breach: Breach::RequiredMissing {
                    component: "d".into()
                },
            }]
        );
    }

    /// T2.2: Every failing rule in one addition is reported together.
    #[test]
    fn every_failing_rule_is_reported() {
        let rules: RuleSet = [
            Rule::excluded("no_ab", "a", "b"),
            Rule::excluded("no_cb", "c", "b"),
        ]
        .into_iter()
        .collect();
        let mut session = fixture(CompatibilityTable::new(), rules);
        assert!(session.add("a").accepted);
        assert!(session.add("c").accepted);

        let outcome = session.add("b");
        let rules: Vec<_> = outcome
            .violations
            .iter()
            .filter_map(|v| match v {
                Violation::RuleViolation { rule, .. } => Some(rule.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(rules, vec!["no_ab", "no_cb"]);
    }

    /// T2.3: Excluded rules are one-directional as declared, but fire in
    /// either addition order.
    #[test]
    fn excluded_fires_regardless_of_order() {
        let rules: RuleSet = [Rule::excluded("no_ab", "a", "b")].into_iter().collect();

        let mut session = fixture(CompatibilityTable::new(), rules);
        assert!(session.add("b").accepted);
        let outcome = session.add("a");
        assert!(matches!(
            outcome.violations.as_slice(),
            [Violation::RuleViolation {
                breach: Breach::Excluded { .. },
                ..
            }]
        ));
    }

    /// T2.4: Limited max above one can never be reached.
    #[test]
    fn limit_above_one_is_unreachable() {
        let rules: RuleSet = [Rule::limited("max_c", "c", None, Some(2))]
            .into_iter()
            .collect();
        let mut session = fixture(CompatibilityTable::new(), rules);

        assert!(session.add("c").accepted);
        let outcome = session.add("c");
        assert_eq!(outcome.violations[0].kind(), ViolationKind::AlreadySelected);
        assert_eq!(session.selected_count(), 1);

        let findings = session.inventory().lint();
        assert!(matches!(
            findings.as_slice(),
            [RuleLint::UnreachableLimit { max: 2, .. }]
        ));
    }

    /// T2.5: Limited max of one still means at most one, and min is checked.
    #[test]
    fn limited_min_is_reported_on_validation() {
        let rules: RuleSet = [Rule::limited("min_c", "c", Some(1), None)]
            .into_iter()
            .collect();
        let mut session = fixture(CompatibilityTable::new(), rules);

        let snapshot = session.snapshot();
        assert!(!snapshot.is_valid);
        assert!(matches!(
            snapshot.validation_errors.as_slice(),
            [Violation::RuleViolation {
                breach: Breach::BelowMin { min: 1, count: 0, .. },
                ..
            }]
        ));

        assert!(session.add("c").accepted);
        assert!(session.snapshot().is_valid);
    }

    /// T2.6: Rules about ids missing from the catalog never fire.
    #[test]
    fn rules_on_unknown_ids_do_not_apply() {
        let rules: RuleSet = [
            Rule::required("need_ghost", "ghost"),
            Rule::excluded("no_a_ghost", "a", "ghost"),
        ]
        .into_iter()
        .collect();
        let mut session = fixture(CompatibilityTable::new(), rules);
        assert!(session.add("a").accepted);
        assert!(session.snapshot().is_valid);
        assert_eq!(session.inventory().lint().len(), 2);
    }
}

// =============================================================================
// TIER T3: SESSION SCENARIOS
// =============================================================================

mod t3_scenarios {
    use super::*;

    /// T3.1: Socket 604 server refuses a Socket 1366 processor.
    #[test]
    fn socket_mismatch_is_rejected() {
        let mut session = standard_session();
        assert!(session.add("hp_ml350g4p").accepted);
        assert!(session.add("intel_xeon_3_0_604").accepted);

        let outcome = session.add("intel_xeon_e5620");
        assert!(!outcome.accepted);
        assert!(
            outcome
                .violations
                .iter()
                .any(|v| v.kind() == ViolationKind::IncompatiblePair)
        );
        assert!(!session.contains("intel_xeon_e5620"));
    }

    /// T3.2: DDR3 does not join a DDR2 build.
    #[test]
    fn memory_generation_mismatch_is_rejected() {
        let mut session = standard_session();
        assert!(session.add("hp_ml350g4p").accepted);
        assert!(session.add("kingston_1gb_ddr2_400").accepted);

        let outcome = session.add("samsung_4gb_ddr3_1333");
        assert!(!outcome.accepted);
        assert!(outcome.violations.iter().any(|v| matches!(
            v,
            Violation::RuleViolation {
                breach: Breach::Excluded { .. },
                ..
            }
        )));
    }

    /// T3.3: Removing an unknown id is a no-op; clear empties everything.
    #[test]
    fn remove_and_clear() {
        let mut session = standard_session();
        assert!(session.add("hp_ml350g4p").accepted);
        assert!(!session.remove("nonexistent_id"));
        assert_eq!(session.selected_count(), 1);

        session.clear();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.component_count(), 0);
        assert_eq!(snapshot.total_price, Price::ZERO);
        assert_eq!(snapshot.total_price.to_string(), "0.00");
        assert_eq!(snapshot.id(), "config_2");
    }

    /// T3.4: A snapshot holds exactly the accepted components, by type.
    #[test]
    fn snapshot_round_trip() {
        let mut session = standard_session();
        let ids = [
            "hp_ml350g4p",
            "intel_xeon_3_0_604",
            "intel_xeon_3_2_604",
            "kingston_1gb_ddr2_400",
            "seagate_500gb_sata",
            "hp_460w_psu",
        ];
        for id in ids {
            assert!(session.add(id).accepted, "{id}");
        }

        let snapshot = session.snapshot();
        assert_eq!(snapshot.component_count(), ids.len());
        assert_eq!(snapshot.components[&ComponentType::Processor].len(), 2);
        assert_eq!(snapshot.total_price, Price::from_units(2055));
        assert!(snapshot.is_valid);

        let mut seen: Vec<_> = snapshot.iter().map(|(_, c)| c.id.as_str()).collect();
        seen.sort_unstable();
        let mut expected = ids.to_vec();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    /// T3.5: Available components shrink as the build takes shape.
    #[test]
    fn available_components_follow_the_build() {
        let mut session = standard_session();
        assert_eq!(session.available_components(ComponentType::Processor).len(), 3);

        assert!(session.add("hp_ml350g4p").accepted);
        let ids: Vec<_> = session
            .available_components(ComponentType::Processor)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["intel_xeon_3_0_604", "intel_xeon_3_2_604"]);
    }

    /// T3.6: Extended dataset keeps the same platform split.
    #[test]
    fn extended_dataset_rejects_cross_platform_memory() {
        let mut session = Session::new(Arc::new(sample::extended().expect("extended")));
        assert!(session.add("ibm_x3650_m3").accepted);
        assert!(session.add("crucial_8gb_ddr3_1600").accepted);
        assert!(!session.add("corsair_2gb_ddr2_533").accepted);
        assert!(session.add("intel_ssd_240gb").accepted);
        assert!(session.snapshot().is_valid);
    }
}
