//! Small client rules used across the engine tests.

use std::cell::{Cell, RefCell};

use chrono::Utc;
use regex::Regex;

use verdict_core::{
    Capabilities, IRule, Outcome, OutcomeCollector, Session, Severity, Value, VerdictResult,
};

/// Null and empty text are errors.
#[derive(Debug, Default)]
pub struct RequiredRule;

impl IRule for RequiredRule {
    fn name(&self) -> &str {
        "required"
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        let missing = match value {
            Value::Null => true,
            Value::Text(text) => text.trim().is_empty(),
            _ => false,
        };
        if missing {
            out.push(Outcome::error(format!("{} is required", session.label())));
        }
        Ok(())
    }
}

/// Integers outside `min..=max` are clamped when the caller takes corrections,
/// and rejected otherwise.
#[derive(Debug)]
pub struct ClampRule {
    pub min: i64,
    pub max: i64,
}

impl ClampRule {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl IRule for ClampRule {
    fn name(&self) -> &str {
        "clamp"
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        let Some(n) = value.as_i64() else {
            return Ok(());
        };
        if (self.min..=self.max).contains(&n) {
            return Ok(());
        }
        if session.supports(Capabilities::MODIFICATION) {
            let clamped = n.clamp(self.min, self.max);
            out.push(Outcome::updated(
                format!("{} clamped to {clamped}", session.label()),
                clamped,
            ));
        } else {
            out.push(Outcome::error(format!(
                "{} must be between {} and {}",
                session.label(),
                self.min,
                self.max
            )));
        }
        Ok(())
    }
}

/// Text is uppercased, always as a correction.
#[derive(Debug, Default)]
pub struct UppercaseRule;

impl IRule for UppercaseRule {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn severity(&self) -> Severity {
        Severity::Updated
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        if let Some(text) = value.as_str() {
            let upper = text.to_uppercase();
            if upper != text {
                out.push(Outcome::updated(format!("{} uppercased", session.label()), upper));
            }
        }
        Ok(())
    }
}

/// Advisory length limit; its findings can never exceed `Warning`.
#[derive(Debug)]
pub struct LengthAdvisoryRule {
    pub max_len: usize,
}

impl IRule for LengthAdvisoryRule {
    fn name(&self) -> &str {
        "length_advisory"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        if let Some(text) = value.as_str() {
            if text.chars().count() > self.max_len {
                // Reported as an error; the collector ceiling grades it down.
                out.push(Outcome::error(format!(
                    "{} is longer than {} characters",
                    session.label(),
                    self.max_len
                )));
            }
        }
        Ok(())
    }
}

/// Text must match a regular expression.
#[derive(Debug)]
pub struct PatternRule {
    pattern: Regex,
    what: String,
}

impl PatternRule {
    pub fn new(pattern: &str, what: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid fixture pattern"),
            what: what.to_string(),
        }
    }

    pub fn email() -> Self {
        Self::new(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$", "an e-mail address")
    }
}

impl IRule for PatternRule {
    fn name(&self) -> &str {
        "pattern"
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        if let Some(text) = value.as_str() {
            if !self.pattern.is_match(text) {
                out.push(Outcome::error(format!("{} is not {}", session.label(), self.what)));
            }
        }
        Ok(())
    }
}

/// Timestamps may not lie in the past, checked only for live input.
#[derive(Debug, Default)]
pub struct NotInPastRule;

impl IRule for NotInPastRule {
    fn name(&self) -> &str {
        "not_in_past"
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        if !session.is_live_input() {
            return Ok(());
        }
        if let Some(when) = value.as_timestamp() {
            if when < Utc::now() {
                out.push(Outcome::error(format!("{} lies in the past", session.label())));
            }
        }
        Ok(())
    }
}

/// Emits a fixed list of outcomes on every call.
#[derive(Debug, Default)]
pub struct ScriptedRule {
    pub outcomes: Vec<Outcome>,
    pub severity: Severity,
}

impl ScriptedRule {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            severity: Severity::Error,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl IRule for ScriptedRule {
    fn name(&self) -> &str {
        "scripted"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(
        &self,
        _value: &Value,
        _session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        out.extend(self.outcomes.iter().cloned());
        Ok(())
    }
}

/// Records every value it is asked to check and reports nothing.
#[derive(Debug, Default)]
pub struct ProbeRule {
    calls: Cell<usize>,
    seen: RefCell<Vec<Value>>,
    needs_instance: bool,
}

impl ProbeRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe that declares it needs an owning instance.
    pub fn needing_instance() -> Self {
        Self {
            needs_instance: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn seen(&self) -> Vec<Value> {
        self.seen.borrow().clone()
    }
}

impl IRule for ProbeRule {
    fn name(&self) -> &str {
        "probe"
    }

    fn requires_instance(&self) -> bool {
        self.needs_instance
    }

    fn check(
        &self,
        value: &Value,
        _session: &Session<'_>,
        _out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(value.clone());
        Ok(())
    }
}
