//! Per-call validation context.
//!
//! A [`CallScope`] lives for exactly one top-level validation call and is shared by
//! every [`Session`] created beneath it, including the sessions of nested objects.
//! It carries the ancestor stack used for cycle detection and a small scratch map
//! for other call-scoped state.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::capabilities::{Capabilities, ValidationState};
use crate::outcome::OutcomeCollector;
use crate::severity::Severity;
use crate::traits::INestedValidator;
use crate::value::{ObjectId, ObjectRef, Value};

/// Opaque key into the call-scoped scratch map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScratchKey(&'static str);

impl ScratchKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

/// State shared by all sessions of one top-level call.
#[derive(Debug, Default)]
pub struct CallScope {
    ancestors: RefCell<Vec<ObjectId>>,
    scratch: RefCell<HashMap<ScratchKey, Value>>,
}

impl CallScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects on the current descent path.
    pub fn depth(&self) -> usize {
        self.ancestors.borrow().len()
    }

    pub fn is_ancestor(&self, object: &ObjectRef) -> bool {
        self.ancestors.borrow().contains(&object.id())
    }

    /// Push `object` onto the descent path.
    ///
    /// Returns `None` when the object is already on the path (a cycle). The entry
    /// is popped when the guard drops, so sibling subtrees do not see each other.
    pub fn enter(&self, object: &ObjectRef) -> Option<AncestorGuard<'_>> {
        let id = object.id();
        let mut ancestors = self.ancestors.borrow_mut();
        if ancestors.contains(&id) {
            return None;
        }
        ancestors.push(id);
        Some(AncestorGuard { scope: self, id })
    }

    pub fn scratch_get(&self, key: ScratchKey) -> Option<Value> {
        self.scratch.borrow().get(&key).cloned()
    }

    pub fn scratch_set(&self, key: ScratchKey, value: Value) -> Option<Value> {
        self.scratch.borrow_mut().insert(key, value)
    }
}

/// Keeps an object on the descent path until dropped.
#[derive(Debug)]
pub struct AncestorGuard<'a> {
    scope: &'a CallScope,
    id: ObjectId,
}

impl Drop for AncestorGuard<'_> {
    fn drop(&mut self) {
        let mut ancestors = self.scope.ancestors.borrow_mut();
        if let Some(pos) = ancestors.iter().rposition(|id| *id == self.id) {
            ancestors.remove(pos);
        }
    }
}

/// What a rule sees about the call it runs in.
///
/// Capabilities and state are fixed by the host before any rule runs.
#[derive(Clone)]
pub struct Session<'a> {
    scope: &'a CallScope,
    nested: Option<&'a dyn INestedValidator>,
    instance: Option<ObjectRef>,
    member_name: Option<String>,
    display_name: Option<String>,
    capabilities: Capabilities,
    state: ValidationState,
}

impl<'a> Session<'a> {
    pub fn new(scope: &'a CallScope, capabilities: Capabilities, state: ValidationState) -> Self {
        Self {
            scope,
            nested: None,
            instance: None,
            member_name: None,
            display_name: None,
            capabilities,
            state,
        }
    }

    pub fn with_instance(mut self, instance: Option<ObjectRef>) -> Self {
        self.instance = instance;
        self
    }

    pub fn with_member(mut self, member_name: Option<&str>, display_name: Option<&str>) -> Self {
        self.member_name = member_name.map(str::to_string);
        self.display_name = display_name.map(str::to_string);
        self
    }

    pub fn with_nested(mut self, nested: &'a dyn INestedValidator) -> Self {
        self.nested = Some(nested);
        self
    }

    /// A session for another object in the same call.
    pub fn for_object(&self, instance: ObjectRef) -> Session<'a> {
        Session {
            scope: self.scope,
            nested: self.nested,
            instance: Some(instance),
            member_name: None,
            display_name: None,
            capabilities: self.capabilities,
            state: self.state,
        }
    }

    pub fn scope(&self) -> &'a CallScope {
        self.scope
    }

    pub fn instance(&self) -> Option<&ObjectRef> {
        self.instance.as_ref()
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// Display name, falling back to the member name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.member_name.as_deref())
    }

    /// Name to use in messages: display name, member name, or `"value"`.
    pub fn label(&self) -> &str {
        self.display_name().unwrap_or("value")
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    pub fn supports(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn is_live_input(&self) -> bool {
        self.state.is_live_input()
    }

    pub fn depth(&self) -> usize {
        self.scope.depth()
    }

    pub fn is_ancestor(&self, object: &ObjectRef) -> bool {
        self.scope.is_ancestor(object)
    }

    pub fn enter(&self, object: &ObjectRef) -> Option<AncestorGuard<'a>> {
        self.scope.enter(object)
    }

    pub fn scratch_get(&self, key: ScratchKey) -> Option<Value> {
        self.scope.scratch_get(key)
    }

    pub fn scratch_set(&self, key: ScratchKey, value: Value) -> Option<Value> {
        self.scope.scratch_set(key, value)
    }

    /// Engine to recurse into, when the session was created by one.
    pub fn nested(&self) -> Option<&'a dyn INestedValidator> {
        self.nested
    }

    /// Fresh collector for a rule with the given severity ceiling.
    pub fn collector(&self, ceiling: Severity) -> OutcomeCollector {
        OutcomeCollector::new(ceiling, self.capabilities)
    }
}

/// Accessor for hosts that only hold a session.
pub fn get_capabilities(session: &Session<'_>) -> Capabilities {
    session.capabilities()
}

/// Accessor for hosts that only hold a session.
pub fn get_state(session: &Session<'_>) -> ValidationState {
    session.state()
}
