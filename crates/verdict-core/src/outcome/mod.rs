//! Graded validation results and their aggregation.

mod collector;

pub use collector::OutcomeCollector;

use crate::constants::{CONFIGURATION_ERROR_PREFIX, MEMBER_SEPARATOR, MESSAGE_SEPARATOR};
use crate::severity::Severity;
use crate::value::Value;

/// One graded result produced by a rule invocation.
///
/// Immutable once built: the builder methods consume and return the outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    severity: Severity,
    message: String,
    new_value: Option<Value>,
    members: Vec<String>,
    rule: Option<String>,
}

impl Outcome {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Success with no message.
    pub fn success() -> Self {
        Self::default()
    }

    /// A correction: the value was replaced by `new_value`.
    pub fn updated(message: impl Into<String>, new_value: impl Into<Value>) -> Self {
        Self::new(Severity::Updated, message).with_new_value(new_value)
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(Severity::Message, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severe_warning(message: impl Into<String>) -> Self {
        Self::new(Severity::SevereWarning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// An `Error` outcome for a misconfigured rule or member.
    pub fn configuration_error(message: impl AsRef<str>) -> Self {
        Self::error(format!("{CONFIGURATION_ERROR_PREFIX}{}", message.as_ref()))
    }

    pub fn with_new_value(mut self, new_value: impl Into<Value>) -> Self {
        self.new_value = Some(new_value.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        let member = member.into();
        if !self.members.contains(&member) {
            self.members.push(member);
        }
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Drop the replacement value, keeping everything else.
    pub fn without_new_value(mut self) -> Self {
        self.new_value = None;
        self
    }

    /// Prefix every message line with `label: `.
    pub fn namespaced(mut self, label: &str) -> Self {
        if !self.message.is_empty() {
            self.message = self
                .message
                .split(MESSAGE_SEPARATOR)
                .map(|line| format!("{label}{MEMBER_SEPARATOR}{line}"))
                .collect::<Vec<_>>()
                .join(MESSAGE_SEPARATOR);
        }
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn new_value(&self) -> Option<&Value> {
        self.new_value.as_ref()
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Name of the rule that produced this outcome.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.severity.is_valid()
    }

    pub fn is_configuration_error(&self) -> bool {
        self.severity.is_error() && self.message.starts_with(CONFIGURATION_ERROR_PREFIX)
    }
}
