//! Property tests for the validation engine.

use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;

use test_fixtures::objects::{link, node, NODE};
use test_fixtures::rules::ClampRule;
use verdict_core::{Capabilities, CompareOp, ObjectRef, RuleHandle, ValidationState, Value};
use verdict_engine::{CompareRule, NestedRule, RuleRegistry, Validator};

fn graph_validator() -> Validator {
    let registry = RuleRegistry::new()
        .with(NODE, "score", CompareRule::new(CompareOp::GREATER_THAN_OR_EQUAL, 0))
        .with(NODE, "left", NestedRule::new())
        .with(NODE, "right", NestedRule::new());
    Validator::with_flags(registry, Capabilities::all(), ValidationState::empty())
}

/// Nodes with random scores and random `left`/`right` links, cycles allowed.
fn arb_graph() -> impl Strategy<Value = (Vec<i64>, Vec<(Option<usize>, Option<usize>)>)> {
    (1usize..7).prop_flat_map(|n| {
        (
            prop::collection::vec(-3i64..4, n),
            prop::collection::vec(
                (prop::option::of(0..n), prop::option::of(0..n)),
                n,
            ),
        )
    })
}

fn build(scores: &[i64], edges: &[(Option<usize>, Option<usize>)]) -> Vec<ObjectRef> {
    let nodes: Vec<ObjectRef> = scores
        .iter()
        .enumerate()
        .map(|(i, score)| node(&format!("n{i}"), *score))
        .collect();
    for (from, (left, right)) in edges.iter().enumerate() {
        if let Some(to) = left {
            link(&nodes[from], "left", &nodes[*to]);
        }
        if let Some(to) = right {
            link(&nodes[from], "right", &nodes[*to]);
        }
    }
    nodes
}

fn reachable(edges: &[(Option<usize>, Option<usize>)]) -> HashSet<usize> {
    let mut seen = HashSet::from([0]);
    let mut stack = vec![0];
    while let Some(at) = stack.pop() {
        let (left, right) = edges[at];
        for next in [left, right].into_iter().flatten() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn graphs_validate_to_completion((scores, edges) in arb_graph()) {
        let nodes = build(&scores, &edges);
        let out = graph_validator().validate_object(Some(&nodes[0])).unwrap();

        let any_negative = reachable(&edges).into_iter().any(|i| scores[i] < 0);
        prop_assert_eq!(!out.is_valid(), any_negative);
    }

    #[test]
    fn clamp_correction_lands_in_range(value in any::<i32>(), lo in -50i64..0, hi in 0i64..50) {
        let rules: Vec<RuleHandle> = vec![Rc::new(ClampRule::new(lo, hi))];
        let engine = Validator::with_flags(
            RuleRegistry::new(),
            Capabilities::all(),
            ValidationState::empty(),
        );
        let out = engine
            .validate_value(None, Value::from(value), &rules, None, None)
            .unwrap();
        prop_assert!(out.is_valid());

        let in_range = (lo..=hi).contains(&i64::from(value));
        match out.new_value() {
            Some(Value::Int(fixed)) => {
                prop_assert!(!in_range);
                prop_assert!((lo..=hi).contains(fixed));
            }
            Some(other) => prop_assert!(false, "unexpected correction {:?}", other),
            None => prop_assert!(in_range),
        }
    }

    #[test]
    fn without_modification_only_range_decides(value in any::<i32>(), hi in 0i64..50) {
        let rules: Vec<RuleHandle> = vec![Rc::new(ClampRule::new(0, hi))];
        let engine = Validator::with_flags(
            RuleRegistry::new(),
            Capabilities::WARNINGS,
            ValidationState::empty(),
        );
        let out = engine
            .validate_value(None, Value::from(value), &rules, None, None)
            .unwrap();
        prop_assert_eq!(out.is_valid(), (0..=hi).contains(&i64::from(value)));
        prop_assert!(out.new_value().is_none());
    }
}
