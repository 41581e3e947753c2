//! Declared rules, keyed by type and member.
//!
//! Populated once at startup; at run time lookups are plain map reads and the
//! rules are dispatched through [`IRule`](verdict_core::IRule).

use std::collections::HashMap;
use std::rc::Rc;

use verdict_core::{IRule, RuleHandle};

#[derive(Default)]
pub struct RuleRegistry {
    members: HashMap<(String, String), Vec<RuleHandle>>,
    types: HashMap<String, Vec<RuleHandle>>,
    display_names: HashMap<(String, String), String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule to a member. Rules run in registration order.
    pub fn register<R: IRule + 'static>(&mut self, type_name: &str, member: &str, rule: R) {
        self.register_handle(type_name, member, Rc::new(rule));
    }

    pub fn register_handle(&mut self, type_name: &str, member: &str, rule: RuleHandle) {
        self.members
            .entry((type_name.to_string(), member.to_string()))
            .or_default()
            .push(rule);
    }

    /// Attach a rule to the object as a whole.
    pub fn register_type<R: IRule + 'static>(&mut self, type_name: &str, rule: R) {
        self.types
            .entry(type_name.to_string())
            .or_default()
            .push(Rc::new(rule));
    }

    /// Name used for a member in messages instead of its identifier.
    pub fn set_display_name(&mut self, type_name: &str, member: &str, display_name: &str) {
        self.display_names.insert(
            (type_name.to_string(), member.to_string()),
            display_name.to_string(),
        );
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<R: IRule + 'static>(mut self, type_name: &str, member: &str, rule: R) -> Self {
        self.register(type_name, member, rule);
        self
    }

    /// Builder-style [`register_type`](Self::register_type).
    pub fn with_type_rule<R: IRule + 'static>(mut self, type_name: &str, rule: R) -> Self {
        self.register_type(type_name, rule);
        self
    }

    pub fn rules_for(&self, type_name: &str, member: &str) -> &[RuleHandle] {
        self.members
            .get(&(type_name.to_string(), member.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn type_rules_for(&self, type_name: &str) -> &[RuleHandle] {
        self.types
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn display_name(&self, type_name: &str, member: &str) -> Option<&str> {
        self.display_names
            .get(&(type_name.to_string(), member.to_string()))
            .map(String::as_str)
    }

    /// Whether any member or object-level rule is declared for the type.
    pub fn has_rules(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
            || self.members.keys().any(|(t, _)| t == type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.types.is_empty()
    }
}
