use crate::errors::VerdictResult;
use crate::outcome::OutcomeCollector;
use crate::session::Session;
use crate::value::ObjectRef;

/// Recursion seam: lets a rule validate a referenced object with the same engine,
/// inside the call its session belongs to.
pub trait INestedValidator {
    fn validate_nested(
        &self,
        object: &ObjectRef,
        parent: &Session<'_>,
    ) -> VerdictResult<OutcomeCollector>;
}
