use std::rc::Rc;

use test_fixtures::objects::{adopt, link, node, Person, Roster, NODE, PERSON};
use test_fixtures::rules::{ProbeRule, RequiredRule};
use verdict_core::config::ValidationConfig;
use verdict_core::{
    CallScope, Capabilities, CompareOp, IRule, ObjectRef, OutcomeCollector, Record, Session,
    Severity, ValidationState, Value,
};
use verdict_engine::{CompareRule, NestedRule, RuleRegistry, Validator};

const SCORE_ERROR: &str = "score: score must be >= 0";

fn graph_rules() -> RuleRegistry {
    RuleRegistry::new()
        .with(NODE, "score", CompareRule::new(CompareOp::GREATER_THAN_OR_EQUAL, 0))
        .with(NODE, "left", NestedRule::new())
        .with(NODE, "right", NestedRule::new())
        .with(NODE, "children", NestedRule::elements())
}

fn validator(registry: RuleRegistry) -> Validator {
    Validator::with_flags(registry, Capabilities::all(), ValidationState::empty())
}

fn lines(out: &OutcomeCollector) -> Vec<String> {
    out.message().lines().map(str::to_string).collect()
}

// --- Cycles ---

#[test]
fn self_reference_terminates() {
    let a = node("a", -1);
    link(&a, "left", &a);
    let out = validator(graph_rules()).validate_object(Some(&a)).unwrap();
    assert_eq!(lines(&out), vec![SCORE_ERROR.to_string()]);
}

#[test]
fn two_node_cycle_validates_each_node_once() {
    let a = node("a", 1);
    let b = node("b", -1);
    link(&a, "left", &b);
    link(&b, "left", &a);

    let out = validator(graph_rules()).validate_object(Some(&a)).unwrap();
    assert_eq!(out.severity(), Severity::Error);
    assert_eq!(lines(&out), vec![format!("left: {SCORE_ERROR}")]);
}

#[test]
fn shared_child_is_validated_through_every_path() {
    let probe = Rc::new(ProbeRule::new());
    let mut registry = graph_rules();
    registry.register_handle(NODE, "name", probe.clone());

    let a = node("a", 1);
    let b = node("b", -1);
    link(&a, "left", &b);
    link(&a, "right", &b);

    let out = validator(registry).validate_object(Some(&a)).unwrap();
    assert_eq!(
        lines(&out),
        vec![format!("left: {SCORE_ERROR}"), format!("right: {SCORE_ERROR}")]
    );
    assert_eq!(
        probe.seen(),
        vec![Value::from("a"), Value::from("b"), Value::from("b")]
    );
}

#[test]
fn longer_cycles_stop_at_the_first_repeat() {
    let probe = Rc::new(ProbeRule::new());
    let mut registry = graph_rules();
    registry.register_handle(NODE, "name", probe.clone());

    let a = node("a", 0);
    let b = node("b", 0);
    let c = node("c", 0);
    link(&a, "left", &b);
    link(&b, "left", &c);
    link(&c, "left", &a);
    link(&c, "right", &b);

    let out = validator(registry).validate_object(Some(&a)).unwrap();
    assert!(out.is_empty());
    assert_eq!(probe.calls(), 3);
}

#[test]
fn revalidating_the_same_graph_gives_the_same_result() {
    let a = node("a", 1);
    let b = node("b", -1);
    link(&a, "left", &b);
    link(&b, "right", &a);
    let engine = validator(graph_rules());

    let first = engine.validate_object(Some(&a)).unwrap().message();
    let second = engine.validate_object(Some(&a)).unwrap().message();
    assert_eq!(first, second);
}

// --- Elements ---

#[test]
fn list_elements_are_namespaced_by_index() {
    let root = node("root", 0);
    let ok = node("ok", 2);
    let bad = node("bad", -5);
    adopt(&root, &[&ok, &bad]);

    let out = validator(graph_rules()).validate_object(Some(&root)).unwrap();
    assert_eq!(lines(&out), vec![format!("children: [1]: {SCORE_ERROR}")]);
}

#[test]
fn non_object_elements_are_ignored() {
    let root = node("root", 0);
    root.set("children", Value::from(vec![Value::Int(3), Value::Null]))
        .unwrap();
    let out = validator(graph_rules()).validate_object(Some(&root)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn element_cycles_are_skipped() {
    let root = node("root", -1);
    let child = node("child", 0);
    adopt(&root, &[&child, &root]);
    adopt(&child, &[&root]);

    let out = validator(graph_rules()).validate_object(Some(&root)).unwrap();
    assert_eq!(lines(&out), vec![SCORE_ERROR.to_string()]);
}

#[test]
fn container_objects_validate_themselves_and_their_elements() {
    let registry = RuleRegistry::new()
        .with(PERSON, "name", RequiredRule)
        .with("Roster", "title", RequiredRule)
        .with("Team", "roster", NestedRule::elements());

    let ada = Person::new(1, "Ada", 36).shared().1;
    let nobody = Person::new(2, "", 20).shared().1;
    let roster = ObjectRef::new(Roster::new("", vec![ada, nobody]));
    let team = Record::new("Team").with("roster", roster).into_ref();

    let out = validator(registry).validate_object(Some(&team)).unwrap();
    assert_eq!(
        lines(&out),
        vec![
            "roster: title: title is required".to_string(),
            "roster: [1]: name: name is required".to_string(),
        ]
    );
}

#[test]
fn element_pointing_back_at_its_container_is_a_cycle() {
    for size in [1, 2, 3, 5, 7] {
        let title_checks = Rc::new(ProbeRule::new());
        let mut registry = RuleRegistry::new()
            .with("Team", "roster", NestedRule::elements())
            .with("Member", "team", NestedRule::elements())
            .with("Roster", "title", RequiredRule);
        registry.register_handle("Roster", "title", title_checks.clone());

        let members: Vec<ObjectRef> = (0..size)
            .map(|_| Record::new("Member").with("team", Value::Null).into_ref())
            .collect();
        let roster = ObjectRef::new(Roster::new("", members.clone()));
        for member in &members {
            member.set("team", Value::Object(roster.clone())).unwrap();
        }
        let team = Record::new("Team").with("roster", roster).into_ref();

        let out = validator(registry).validate_object(Some(&team)).unwrap();
        assert_eq!(title_checks.calls(), 1, "{size} members");
        assert_eq!(
            lines(&out),
            vec!["roster: title: title is required".to_string()],
            "{size} members"
        );
    }
}

#[test]
fn element_mode_is_opt_in() {
    assert!(!NestedRule::new().validates_elements());
    assert!(NestedRule::elements().validates_elements());
}

#[test]
fn scalar_marked_for_elements_is_a_configuration_error() {
    let registry = RuleRegistry::new().with(NODE, "score", NestedRule::elements());
    let out = validator(registry)
        .validate_object(Some(&node("a", 1)))
        .unwrap();
    let outcome = &out.outcomes()[0];
    assert_eq!(outcome.severity(), Severity::Error);
    assert!(outcome.text().starts_with("score: Configuration error: "));
    assert!(outcome.text().contains("not iterable"));
}

#[test]
fn plain_object_marked_for_elements_is_a_configuration_error() {
    let registry = RuleRegistry::new().with("Holder", "inner", NestedRule::elements());
    let holder = Record::new("Holder")
        .with("inner", Record::new("Inner").into_ref())
        .into_ref();
    let out = validator(registry).validate_object(Some(&holder)).unwrap();
    assert_eq!(out.severity(), Severity::Error);
    assert!(out.message().contains("object value is not iterable"));
}

#[test]
fn null_references_are_valid() {
    let out = validator(graph_rules())
        .validate_object(Some(&node("a", 1)))
        .unwrap();
    assert!(out.is_empty());
}

// --- Depth limit ---

#[test]
fn depth_limit_stops_descent() {
    let a = node("a", 0);
    let b = node("b", 0);
    let c = node("c", -1);
    link(&a, "left", &b);
    link(&b, "left", &c);

    let config = ValidationConfig {
        max_depth: Some(2),
        ..ValidationConfig::default()
    };
    let out = Validator::new(graph_rules(), config)
        .unwrap()
        .validate_object(Some(&a))
        .unwrap();
    let message = out.message();
    assert!(message.contains("nesting depth limit of 2 exceeded at Node"), "{message}");
    assert!(!message.contains("score must be"));

    let unbounded = validator(graph_rules()).validate_object(Some(&a)).unwrap();
    assert_eq!(
        lines(&unbounded),
        vec![format!("left: left: {SCORE_ERROR}")]
    );
}

// --- Outside an engine ---

#[test]
fn nested_rule_needs_an_engine() {
    let scope = CallScope::new();
    let session = Session::new(&scope, Capabilities::all(), ValidationState::empty());
    let mut out = session.collector(Severity::Error);
    NestedRule::new()
        .check(&Value::Object(node("a", 1)), &session, &mut out)
        .unwrap();
    assert!(out.merged().is_configuration_error());
}
