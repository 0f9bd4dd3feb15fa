//! Property-based tests for invariants that must hold for any finite
//! Kripke structure and any formula, not just the worked examples.

use ctl_checker::{sat, StateSet};
use ctl_formula::Formula;
use kripke_graph::Graph;
use proptest::prelude::*;

const PROPS: &[&str] = &["p", "q", "r"];

fn arb_graph(max_states: u32) -> impl Strategy<Value = Graph> {
    (2..=max_states).prop_flat_map(|n| {
        let succs = prop::collection::vec(
            prop::collection::vec(0..n, 0..=3),
            n as usize,
        );
        let labels = prop::collection::vec(
            prop::collection::vec(0..PROPS.len(), 0..=2),
            n as usize,
        );
        (succs, labels).prop_map(move |(succs, labels)| {
            let mut g = Graph::new(0);
            for i in 1..n {
                g.add_state(i);
            }
            for (from, outs) in succs.into_iter().enumerate() {
                for to in outs {
                    g.add_transition(from as u32, to);
                }
            }
            for (s, props) in labels.into_iter().enumerate() {
                for p in props {
                    g.add_label(s as u32, PROPS[p]);
                }
            }
            g
        })
    })
}

fn arb_formula(depth: u32) -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        Just(Formula::tru()),
        Just(Formula::fls()),
        (0..PROPS.len()).prop_map(|i| Formula::ap(PROPS[i])),
    ];
    leaf.prop_recursive(depth, 64, 4, move |inner| {
        prop_oneof![
            inner.clone().prop_map(|f| f.not()),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.clone().prop_map(|f| f.ex()),
            inner.clone().prop_map(|f| f.ax()),
            inner.clone().prop_map(|f| f.ef()),
            inner.clone().prop_map(|f| f.af()),
            inner.clone().prop_map(|f| f.eg()),
            inner.clone().prop_map(|f| f.ag()),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.eu(b)),
        ]
    })
}

fn subset(a: &StateSet, b: &StateSet) -> bool {
    a.iter().all(|s| b.contains(s))
}

proptest! {
    #[test]
    fn truth_constants_match_universe(g in arb_graph(6)) {
        let t = sat(&g, &Formula::tru()).unwrap();
        let f = sat(&g, &Formula::fls()).unwrap();
        prop_assert_eq!(t.count(), g.len());
        prop_assert_eq!(f.count(), 0);
    }

    #[test]
    fn double_negation_is_identity(g in arb_graph(6), phi in arb_formula(3)) {
        let a = sat(&g, &phi).unwrap();
        let b = sat(&g, &phi.clone().not().not()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn ag_is_complement_of_ef_not(g in arb_graph(6), phi in arb_formula(2)) {
        let ag = sat(&g, &phi.clone().ag()).unwrap();
        let ef_not = sat(&g, &phi.clone().not().ef()).unwrap();
        let all = sat(&g, &Formula::tru()).unwrap();
        let expected = ef_not.complement_in(&all);
        prop_assert_eq!(ag, expected);
    }

    #[test]
    fn ef_equals_eu_true(g in arb_graph(6), phi in arb_formula(2)) {
        let ef = sat(&g, &phi.clone().ef()).unwrap();
        let eu_true = sat(&g, &Formula::tru().eu(phi)).unwrap();
        prop_assert_eq!(ef, eu_true);
    }

    #[test]
    fn monotonicity_of_ef_and_eg(g in arb_graph(6), phi in arb_formula(2)) {
        // psi := phi ∨ p, so every state satisfying phi also satisfies psi.
        let psi = phi.clone().or(Formula::ap("p"));
        let ef_phi = sat(&g, &phi.clone().ef()).unwrap();
        let ef_psi = sat(&g, &psi.clone().ef()).unwrap();
        prop_assert!(subset(&ef_phi, &ef_psi));

        let eg_phi = sat(&g, &phi.clone().eg()).unwrap();
        let eg_psi = sat(&g, &psi.eg()).unwrap();
        prop_assert!(subset(&eg_phi, &eg_psi));
    }

    #[test]
    fn a_until_is_a_subset_of_e_until(g in arb_graph(6), phi in arb_formula(2), psi in arb_formula(2)) {
        // Every path satisfying the A[phi U psi] guarantee is in particular
        // one witnessing path, so sat(A[phi U psi]) must never exceed
        // sat(E[phi U psi]).
        let a_until = sat(&g, &phi.clone().au(psi.clone())).unwrap();
        let e_until = sat(&g, &phi.eu(psi)).unwrap();
        prop_assert!(subset(&a_until, &e_until));
    }
}
