use std::rc::Rc;

use crate::errors::VerdictResult;
use crate::outcome::OutcomeCollector;
use crate::session::Session;
use crate::severity::Severity;
use crate::value::Value;

/// Contract every validator implements.
///
/// A rule is configured once when it is declared and is then reused across any
/// number of calls; it must not keep per-call state. It inspects `value` and
/// appends zero or more outcomes to `out`:
///
/// - invalid input is an `Error` outcome, never an `Err`;
/// - a correction is an `Updated` outcome carrying the replacement value, and is
///   only offered when the session supports `MODIFICATION`;
/// - `Err` is reserved for programming errors such as comparing incomparable values.
pub trait IRule {
    /// Short identifier, attached to every outcome the rule produces.
    fn name(&self) -> &str;

    /// Highest severity this rule can report.
    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Human-readable description of what the rule enforces.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Whether the rule needs the owning instance (e.g. to read sibling members).
    fn requires_instance(&self) -> bool {
        false
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()>;
}

/// Shared handle to a declared rule.
pub type RuleHandle = Rc<dyn IRule>;
