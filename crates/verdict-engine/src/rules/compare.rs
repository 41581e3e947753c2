use verdict_core::{
    CompareOp, IRule, Outcome, OutcomeCollector, Session, Severity, Value, VerdictResult,
};

/// What the validated value is compared against.
#[derive(Debug, Clone)]
pub enum CompareTarget {
    /// A constant fixed when the rule is declared.
    Value(Value),
    /// Another member of the owning instance.
    Member(String),
}

/// `value <op> target`, e.g. `age <= 120` or `end >= start`.
///
/// Null on either side passes; requiring a value is a separate rule's job.
#[derive(Debug, Clone)]
pub struct CompareRule {
    op: CompareOp,
    target: CompareTarget,
    severity: Severity,
    message: Option<String>,
}

impl CompareRule {
    pub fn new(op: CompareOp, target: impl Into<Value>) -> Self {
        Self {
            op,
            target: CompareTarget::Value(target.into()),
            severity: Severity::Error,
            message: None,
        }
    }

    pub fn member(op: CompareOp, member: impl Into<String>) -> Self {
        Self {
            op,
            target: CompareTarget::Member(member.into()),
            severity: Severity::Error,
            message: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Fixed failure message instead of the generated one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn target(&self) -> &CompareTarget {
        &self.target
    }
}

impl IRule for CompareRule {
    fn name(&self) -> &str {
        "compare"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn requires_instance(&self) -> bool {
        matches!(self.target, CompareTarget::Member(_))
    }

    fn check(
        &self,
        value: &Value,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        if value.is_null() {
            return Ok(());
        }

        let (other, other_label) = match &self.target {
            CompareTarget::Value(constant) => (constant.clone(), constant.to_string()),
            CompareTarget::Member(member) => {
                let Some(instance) = session.instance() else {
                    out.push(Outcome::configuration_error(format!(
                        "comparison with member '{member}' needs an owning instance"
                    )));
                    return Ok(());
                };
                match instance.get(member)? {
                    Some(other) => (other, member.clone()),
                    None => {
                        out.push(Outcome::configuration_error(format!(
                            "compared member '{member}' not found on {}",
                            instance.type_name()
                        )));
                        return Ok(());
                    }
                }
            }
        };

        if other.is_null() {
            return Ok(());
        }

        if !self.op.evaluate(value, &other)? {
            let message = self.message.clone().unwrap_or_else(|| {
                format!("{} must be {} {}", session.label(), self.op, other_label)
            });
            out.push(Outcome::new(self.severity, message));
        }
        Ok(())
    }
}
