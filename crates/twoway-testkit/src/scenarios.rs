//! Golden scenarios with known outcomes.
//!
//! Each scenario fixes both inputs and every expected category, so any
//! implementation of the reconciler can be checked against the same table.

use twoway_core::{reconcile, reconcile_ordered, Reconciled, Result};

use crate::record::{by_id, by_id_desc, by_version, records, Record};

/// Expected categories, as `(id, version)` pairs.
#[derive(Debug, Clone, Default)]
pub struct Expected {
    pub only_in_a: &'static [(u32, u32)],
    pub only_in_b: &'static [(u32, u32)],
    pub newer_in_a: &'static [(u32, u32)],
    pub newer_in_b: &'static [(u32, u32)],
    /// A side of each Equal pair; the B side is identical.
    pub equal: &'static [(u32, u32)],
    /// (newer, older) entries of the Not map.
    pub not: &'static [((u32, u32), (u32, u32))],
    pub has_changes: bool,
}

/// A golden scenario.
#[derive(Debug, Clone)]
pub struct GoldenScenario {
    /// Human-readable name.
    pub name: &'static str,
    pub a: &'static [(u32, u32)],
    pub b: &'static [(u32, u32)],
    /// Order the output by descending id instead of merge order.
    pub descending: bool,
    pub expected: Expected,
}

/// Get all golden scenarios.
pub fn all_scenarios() -> Vec<GoldenScenario> {
    vec![
        GoldenScenario {
            name: "mixed: only-A, only-B, newer in B",
            a: &[(1, 5), (2, 1)],
            b: &[(2, 9), (3, 1)],
            descending: false,
            expected: Expected {
                only_in_a: &[(1, 5)],
                only_in_b: &[(3, 1)],
                newer_in_b: &[(2, 9)],
                not: &[((2, 9), (2, 1))],
                has_changes: true,
                ..Expected::default()
            },
        },
        GoldenScenario {
            name: "identical single item",
            a: &[(7, 2)],
            b: &[(7, 2)],
            descending: false,
            expected: Expected {
                equal: &[(7, 2)],
                has_changes: false,
                ..Expected::default()
            },
        },
        GoldenScenario {
            name: "descending result order",
            a: &[(1, 1), (3, 1), (2, 1)],
            b: &[],
            descending: true,
            expected: Expected {
                only_in_a: &[(3, 1), (2, 1), (1, 1)],
                has_changes: true,
                ..Expected::default()
            },
        },
        GoldenScenario {
            name: "newer on both sides",
            a: &[(4, 2), (5, 1), (6, 3)],
            b: &[(6, 3), (5, 4), (4, 1)],
            descending: false,
            expected: Expected {
                newer_in_a: &[(4, 2)],
                newer_in_b: &[(5, 4)],
                equal: &[(6, 3)],
                not: &[((4, 2), (4, 1)), ((5, 4), (5, 1))],
                has_changes: true,
                ..Expected::default()
            },
        },
        GoldenScenario {
            name: "both empty",
            a: &[],
            b: &[],
            descending: false,
            expected: Expected::default(),
        },
    ]
}

/// Reconcile the inputs of a scenario.
pub fn run_scenario(scenario: &GoldenScenario) -> Result<Reconciled<Record>> {
    let a = records(scenario.a);
    let b = records(scenario.b);
    if scenario.descending {
        reconcile_ordered(a, b, by_id, by_version, by_id_desc)
    } else {
        reconcile(a, b, by_id, by_version)
    }
}

/// Check a result against a scenario's expectations.
pub fn matches_expected(result: &Reconciled<Record>, expected: &Expected) -> bool {
    let equal: Vec<Record> = result.equal().iter().map(|(a, _)| a.clone()).collect();
    let not: Vec<(Record, Record)> = result
        .not()
        .iter()
        .map(|(newer, old)| (newer.clone(), old.clone()))
        .collect();
    let expected_not: Vec<(Record, Record)> = expected
        .not
        .iter()
        .map(|&(newer, old)| (newer.into(), old.into()))
        .collect();

    result.only_in_a() == records(expected.only_in_a).as_slice()
        && result.only_in_b() == records(expected.only_in_b).as_slice()
        && result.newer_in_a() == records(expected.newer_in_a).as_slice()
        && result.newer_in_b() == records(expected.newer_in_b).as_slice()
        && equal == records(expected.equal)
        && result.equal().iter().all(|(a, b)| a == b)
        && not == expected_not
        && result.has_changes() == expected.has_changes
}

/// Run every scenario, reporting `(name, passed)`.
pub fn verify_all_scenarios() -> Vec<(String, bool)> {
    all_scenarios()
        .iter()
        .map(|s| {
            let passed = run_scenario(s)
                .map(|r| matches_expected(&r, &s.expected))
                .unwrap_or(false);
            (s.name.to_string(), passed)
        })
        .collect()
}
