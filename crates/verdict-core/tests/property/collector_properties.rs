//! Property tests for OutcomeCollector merging.

use proptest::prelude::*;

use verdict_core::{Capabilities, Outcome, OutcomeCollector, Severity, Value};

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn arb_capabilities() -> impl Strategy<Value = Capabilities> {
    (0u8..8).prop_map(Capabilities::from_bits_truncate)
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    (arb_severity(), "[a-z]{0,8}", prop::option::of(any::<i64>())).prop_map(
        |(severity, message, replacement)| {
            let outcome = Outcome::new(severity, message);
            match replacement {
                Some(v) => outcome.with_new_value(v),
                None => outcome,
            }
        },
    )
}

fn collect(ceiling: Severity, caps: Capabilities, outcomes: &[Outcome]) -> OutcomeCollector {
    let mut out = OutcomeCollector::new(ceiling, caps);
    out.extend(outcomes.iter().cloned());
    out
}

proptest! {
    #[test]
    fn merged_severity_never_exceeds_ceiling(
        ceiling in arb_severity(),
        caps in arb_capabilities(),
        outcomes in prop::collection::vec(arb_outcome(), 0..6),
    ) {
        let out = collect(ceiling, caps, &outcomes);
        prop_assert!(out.merged().severity() <= ceiling);
    }

    #[test]
    fn merged_severity_is_capped_maximum(
        caps in arb_capabilities(),
        outcomes in prop::collection::vec(arb_outcome(), 0..6),
    ) {
        let out = collect(Severity::Error, caps, &outcomes);
        let highest = outcomes.iter().map(Outcome::severity).max().unwrap_or_default();
        if highest == Severity::Error {
            prop_assert_eq!(out.merged().severity(), Severity::Error);
        } else if caps.contains(Capabilities::WARNINGS) {
            prop_assert_eq!(out.merged().severity(), highest);
        } else {
            prop_assert_eq!(out.merged().severity(), Severity::None);
        }
    }

    #[test]
    fn last_replacement_wins(
        outcomes in prop::collection::vec(arb_outcome(), 0..6),
    ) {
        let out = collect(Severity::Error, Capabilities::all(), &outcomes);
        let expected = outcomes.iter().rev().find_map(Outcome::new_value);
        prop_assert_eq!(out.new_value(), expected);
    }

    #[test]
    fn appending_an_error_invalidates(
        caps in arb_capabilities(),
        outcomes in prop::collection::vec(arb_outcome(), 0..6),
    ) {
        let mut out = collect(Severity::Error, caps, &outcomes);
        out.push(Outcome::error("boom"));
        prop_assert!(!out.is_valid());
        prop_assert!(out.merged().text().contains("boom"));
    }

    #[test]
    fn merged_text_keeps_every_message_in_order(
        outcomes in prop::collection::vec(arb_outcome(), 1..6),
    ) {
        let mut out = collect(Severity::Error, Capabilities::all(), &outcomes);
        out.push(Outcome::error("end"));
        let expected: Vec<&str> = outcomes
            .iter()
            .map(Outcome::text)
            .filter(|t| !t.is_empty())
            .chain(std::iter::once("end"))
            .collect();
        let merged = out.merged();
        prop_assert_eq!(merged.text(), expected.join("\n"));
    }
}

#[test]
fn replacement_survives_without_warnings() {
    let mut out = OutcomeCollector::new(Severity::Error, Capabilities::MODIFICATION);
    out.push(Outcome::updated("fixed", 3));
    let merged = out.merged();
    assert_eq!(merged.severity(), Severity::None);
    assert_eq!(merged.new_value(), Some(&Value::Int(3)));
}
