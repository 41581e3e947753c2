use crate::capabilities::Capabilities;
use crate::constants::MESSAGE_SEPARATOR;
use crate::errors::{VerdictError, VerdictResult};
use crate::severity::Severity;
use crate::value::Value;

use super::Outcome;

/// Accumulates the outcomes of one validation call and merges them into one.
///
/// Merge rules:
/// - no outcomes: success, no message;
/// - exactly one outcome, every capability supported, ceiling `Error`: that outcome verbatim;
/// - otherwise messages are joined one per line in append order, severity is the
///   highest outcome severity capped at the ceiling, the replacement value is the
///   last one appended; without `WARNINGS` anything below `Error` is reported as
///   plain success.
#[derive(Debug, Clone)]
pub struct OutcomeCollector {
    ceiling: Severity,
    capabilities: Capabilities,
    outcomes: Vec<Outcome>,
}

impl OutcomeCollector {
    pub fn new(ceiling: Severity, capabilities: Capabilities) -> Self {
        Self {
            ceiling,
            capabilities,
            outcomes: Vec::new(),
        }
    }

    /// Append an outcome. Outcomes are never removed.
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        self.outcomes.extend(outcomes);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The severity ceiling of the rule this collector belongs to.
    pub fn ceiling(&self) -> Severity {
        self.ceiling
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn is_fast_path(&self) -> bool {
        self.outcomes.len() == 1
            && self.capabilities.is_everything()
            && self.ceiling == Severity::Error
    }

    /// Merged severity after the ceiling and the `WARNINGS` negotiation.
    pub fn severity(&self) -> Severity {
        let highest = self
            .outcomes
            .iter()
            .map(Outcome::severity)
            .max()
            .unwrap_or_default();
        let capped = highest.min(self.ceiling);
        if capped.is_valid() && !self.capabilities.contains(Capabilities::WARNINGS) {
            Severity::None
        } else {
            capped
        }
    }

    /// Latest replacement value, later outcomes win.
    pub fn new_value(&self) -> Option<&Value> {
        self.outcomes.iter().rev().find_map(Outcome::new_value)
    }

    pub fn is_modified(&self) -> bool {
        self.new_value().is_some()
    }

    /// Merged message; empty when the merged result is a plain success.
    pub fn message(&self) -> String {
        if self.outcomes.is_empty() || self.severity() == Severity::None {
            return String::new();
        }
        self.outcomes
            .iter()
            .map(Outcome::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR)
    }

    /// The single summarized outcome of this call.
    pub fn merged(&self) -> Outcome {
        if self.outcomes.is_empty() {
            return Outcome::success();
        }
        if self.is_fast_path() {
            return self.outcomes[0].clone();
        }

        let mut merged = Outcome::new(self.severity(), self.message());
        if let Some(value) = self.new_value() {
            merged = merged.with_new_value(value.clone());
        }
        for member in self.outcomes.iter().flat_map(Outcome::members) {
            merged = merged.with_member(member.clone());
        }
        let mut rules = self.outcomes.iter().map(Outcome::rule);
        if let Some(Some(first)) = rules.next() {
            if rules.all(|rule| rule == Some(first)) {
                merged = merged.with_rule(first);
            }
        }
        merged
    }

    pub fn is_valid(&self) -> bool {
        self.severity().is_valid()
    }

    /// Turn an invalid result into [`VerdictError::Invalid`] carrying the merged message.
    pub fn fail_if_invalid(&self) -> VerdictResult<()> {
        if self.is_valid() {
            return Ok(());
        }
        let merged = self.merged();
        Err(VerdictError::Invalid {
            severity: merged.severity(),
            message: merged.text().to_string(),
        })
    }
}
