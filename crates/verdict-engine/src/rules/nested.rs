//! Cycle-safe validation of referenced objects.
//!
//! The referenced object is validated with the same engine, inside the same call.
//! It is skipped when it is the owning instance itself, or when it is already on
//! the current descent path. A container stays on the path while its elements are
//! validated, so an element pointing back at its container is a cycle. The path
//! entry is popped as soon as the branch returns, so an object shared by two
//! sibling members is validated through both.

use tracing::trace;

use verdict_core::{
    AncestorGuard, INestedValidator, IRule, ObjectRef, Outcome, OutcomeCollector, Session,
    Severity, Value, VerdictResult,
};

#[derive(Debug, Clone, Default)]
pub struct NestedRule {
    validate_elements: bool,
    severity: Option<Severity>,
    description: Option<String>,
}

impl NestedRule {
    /// Validate the referenced object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also validate every object element of the referenced container.
    pub fn elements() -> Self {
        Self {
            validate_elements: true,
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validates_elements(&self) -> bool {
        self.validate_elements
    }

    /// Put `object` on the descent path, or `None` when it is the owning
    /// instance or already an ancestor.
    fn enter<'a>(&self, object: &ObjectRef, session: &Session<'a>) -> Option<AncestorGuard<'a>> {
        if session.instance().is_some_and(|owner| owner.ptr_eq(object)) {
            trace!(type_name = object.type_name(), "self reference skipped");
            return None;
        }
        let guard = session.enter(object);
        if guard.is_none() {
            trace!(type_name = object.type_name(), "cycle skipped");
        }
        guard
    }

    /// Validate an object that is already on the descent path.
    fn validate_entered(
        &self,
        object: &ObjectRef,
        path: Option<&str>,
        session: &Session<'_>,
        nested: &dyn INestedValidator,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        let merged = nested.validate_nested(object, session)?.merged();
        if merged.severity() == Severity::None && merged.text().is_empty() {
            return Ok(());
        }
        let merged = merged.without_new_value();
        out.push(match path {
            Some(path) => merged.namespaced(path),
            None => merged,
        });
        Ok(())
    }

    fn validate_items(
        &self,
        items: &[Value],
        session: &Session<'_>,
        nested: &dyn INestedValidator,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        for (index, item) in items.iter().enumerate() {
            if let Value::Object(object) = item {
                let Some(_guard) = self.enter(object, session) else {
                    continue;
                };
                let path = format!("[{index}]");
                self.validate_entered(object, Some(&path), session, nested, out)?;
            }
        }
        Ok(())
    }
}

fn not_iterable(session: &Session<'_>, value: &Value) -> Outcome {
    Outcome::configuration_error(format!(
        "element validation requested on {}, but a {} value is not iterable",
        session.label(),
        value.kind()
    ))
}

impl IRule for NestedRule {
    fn name(&self) -> &str {
        "nested"
    }

    fn severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        let Some(nested) = session.nested() else {
            out.push(Outcome::configuration_error(
                "nested validation needs a session created by an engine",
            ));
            return Ok(());
        };

        match value {
            Value::Null => {}
            Value::Object(object) => {
                // The container stays on the path while its elements are validated.
                let Some(_guard) = self.enter(object, session) else {
                    return Ok(());
                };
                self.validate_entered(object, None, session, nested, out)?;
                if self.validate_elements {
                    match object.elements()? {
                        Some(items) => self.validate_items(&items, session, nested, out)?,
                        None => out.push(not_iterable(session, value)),
                    }
                }
            }
            Value::List(items) if self.validate_elements => {
                self.validate_items(items, session, nested, out)?;
            }
            Value::List(_) => {}
            other if self.validate_elements => out.push(not_iterable(session, other)),
            _ => {}
        }
        Ok(())
    }
}
