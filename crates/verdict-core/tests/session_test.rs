use verdict_core::{
    get_capabilities, get_state, CallScope, Capabilities, Record, ScratchKey, Session, Severity,
    ValidationState, Value,
};

const VISITED: ScratchKey = ScratchKey::new("visited");

fn session(scope: &CallScope) -> Session<'_> {
    Session::new(scope, Capabilities::WARNINGS, ValidationState::LIVE_INPUT)
}

#[test]
fn flags_are_visible_to_rules() {
    let scope = CallScope::new();
    let session = session(&scope);
    assert_eq!(get_capabilities(&session), Capabilities::WARNINGS);
    assert_eq!(get_state(&session), ValidationState::LIVE_INPUT);
    assert!(session.supports(Capabilities::WARNINGS));
    assert!(!session.supports(Capabilities::MODIFICATION));
    assert!(session.is_live_input());
}

#[test]
fn label_prefers_display_name() {
    let scope = CallScope::new();
    assert_eq!(session(&scope).label(), "value");
    let member = session(&scope).with_member(Some("dob"), None);
    assert_eq!(member.label(), "dob");
    let display = session(&scope).with_member(Some("dob"), Some("Date of birth"));
    assert_eq!(display.label(), "Date of birth");
    assert_eq!(display.member_name(), Some("dob"));
}

#[test]
fn ancestors_track_the_current_path() {
    let scope = CallScope::new();
    let session = session(&scope);
    let a = Record::new("Node").into_ref();
    let b = Record::new("Node").into_ref();

    let guard_a = session.enter(&a).unwrap();
    assert!(session.enter(&a).is_none());
    {
        let _guard_b = session.enter(&b).unwrap();
        assert_eq!(session.depth(), 2);
        assert!(session.is_ancestor(&b));
    }
    assert!(!session.is_ancestor(&b));
    assert!(session.enter(&b).is_some());
    drop(guard_a);
    assert_eq!(session.depth(), 0);
}

#[test]
fn derived_sessions_share_the_call_scope() {
    let scope = CallScope::new();
    let parent = session(&scope).with_member(Some("child"), None);
    let child_object = Record::new("Node").into_ref();
    let child = parent.for_object(child_object.clone());

    assert!(child.member_name().is_none());
    assert!(child.instance().is_some_and(|i| i.ptr_eq(&child_object)));
    assert_eq!(child.capabilities(), parent.capabilities());

    let _guard = child.enter(&child_object).unwrap();
    assert!(parent.is_ancestor(&child_object));
}

#[test]
fn scratch_is_call_scoped() {
    let scope = CallScope::new();
    let session = session(&scope);
    assert!(session.scratch_get(VISITED).is_none());
    session.scratch_set(VISITED, Value::Int(1));
    assert_eq!(session.scratch_get(VISITED), Some(Value::Int(1)));

    let other = CallScope::new();
    assert!(other.scratch_get(VISITED).is_none());
}

#[test]
fn collectors_inherit_session_capabilities() {
    let scope = CallScope::new();
    let out = session(&scope).collector(Severity::Warning);
    assert_eq!(out.ceiling(), Severity::Warning);
    assert_eq!(out.capabilities(), Capabilities::WARNINGS);
    assert!(session(&scope).nested().is_none());
}
