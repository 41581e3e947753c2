//! The validator: runs declared rules against objects,
//! members, and bare values, applies corrections, and merges outcomes.

use tracing::{debug, trace};

use verdict_core::config::ValidationConfig;
use verdict_core::{
    CallScope, Capabilities, INestedValidator, ObjectRef, Outcome, OutcomeCollector, RuleHandle,
    Session, Severity, ValidationState, Value, VerdictError, VerdictResult,
};

use crate::registry::RuleRegistry;

/// The validation engine.
///
/// Constructed explicitly and passed to wherever validation happens; capabilities
/// and state are fixed at construction and apply to every call.
pub struct Validator {
    registry: RuleRegistry,
    config: ValidationConfig,
    capabilities: Capabilities,
    state: ValidationState,
}

impl Validator {
    /// Engine for a validated configuration.
    pub fn new(registry: RuleRegistry, config: ValidationConfig) -> VerdictResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(registry, config))
    }

    /// Engine with explicit flags and otherwise default configuration.
    pub fn with_flags(
        registry: RuleRegistry,
        capabilities: Capabilities,
        state: ValidationState,
    ) -> Self {
        Self::from_parts(registry, ValidationConfig::from_flags(capabilities, state))
    }

    fn from_parts(registry: RuleRegistry, config: ValidationConfig) -> Self {
        let capabilities = config.capabilities();
        let state = config.state();
        Self {
            registry,
            config,
            capabilities,
            state,
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Validate every member of `instance` that carries rules, then its object-level rules.
    ///
    /// `None` is trivially valid. Scalar corrections are written back when the
    /// engine supports modification; corrections of lists and objects are not.
    pub fn validate_object(&self, instance: Option<&ObjectRef>) -> VerdictResult<OutcomeCollector> {
        let mut out = self.call_collector();
        let Some(instance) = instance else {
            return Ok(out);
        };
        debug!(type_name = instance.type_name(), "validate_object");

        let scope = CallScope::new();
        let _root = scope.enter(instance);
        let session = self.session(&scope).with_instance(Some(instance.clone()));
        self.collect_object(instance, &session, &mut out)?;

        debug!(
            type_name = instance.type_name(),
            severity = %out.severity(),
            "validate_object complete"
        );
        Ok(out)
    }

    /// Validate one member and write a correction back to it.
    pub fn validate_member(
        &self,
        instance: &ObjectRef,
        member: &str,
    ) -> VerdictResult<OutcomeCollector> {
        debug!(type_name = instance.type_name(), member, "validate_member");
        let scope = CallScope::new();
        let _root = scope.enter(instance);
        let session = self.session(&scope).with_instance(Some(instance.clone()));

        let Some(value) = instance.get(member)? else {
            let mut out = self.call_collector();
            out.push(missing_member(instance, member));
            return Ok(out);
        };

        let display = self.registry.display_name(instance.type_name(), member);
        let session = session.with_member(Some(member), display);
        let rules = self.registry.rules_for(instance.type_name(), member);
        let mut out = self.run_rules(value, rules, &session)?;

        if let Some(corrected) = self.correction(&out).cloned() {
            self.write_back(instance, member, corrected, &mut out)?;
        }
        Ok(out)
    }

    /// Validate `value` against `rules`, in declaration order.
    ///
    /// Each rule sees the corrections applied by the rules before it. The
    /// collector's `new_value` is the corrected value, if any.
    pub fn validate_value(
        &self,
        instance: Option<&ObjectRef>,
        value: Value,
        rules: &[RuleHandle],
        member_name: Option<&str>,
        display_name: Option<&str>,
    ) -> VerdictResult<OutcomeCollector> {
        trace!(
            member = member_name.unwrap_or_default(),
            rules = rules.len(),
            "validate_value"
        );
        let scope = CallScope::new();
        let _root = instance.and_then(|i| scope.enter(i));
        let session = self
            .session(&scope)
            .with_instance(instance.cloned())
            .with_member(member_name, display_name);
        self.run_rules(value, rules, &session)
    }

    /// Validate `candidate` with the rules of `instance.member` and assign it to `target`.
    ///
    /// On failure `target` is left untouched and [`VerdictError::Invalid`] is
    /// returned. On success `target` receives the corrected value, or the
    /// candidate itself when no rule corrected it.
    pub fn set_with_validation(
        &self,
        target: &mut Value,
        candidate: Value,
        instance: &ObjectRef,
        member: &str,
    ) -> VerdictResult<OutcomeCollector> {
        let rules = self.registry.rules_for(instance.type_name(), member);
        let display = self.registry.display_name(instance.type_name(), member);
        let out = self.validate_value(
            Some(instance),
            candidate.clone(),
            rules,
            Some(member),
            display,
        )?;
        out.fail_if_invalid()?;

        *target = match self.correction(&out) {
            Some(corrected) => corrected.clone(),
            None => candidate,
        };
        Ok(out)
    }

    /// [`set_with_validation`](Self::set_with_validation) targeting the member itself.
    pub fn assign_member(
        &self,
        instance: &ObjectRef,
        member: &str,
        candidate: Value,
    ) -> VerdictResult<OutcomeCollector> {
        let mut slot = instance
            .get(member)?
            .ok_or_else(|| VerdictError::MemberNotFound {
                type_name: instance.type_name().to_string(),
                member: member.to_string(),
            })?;
        let out = self.set_with_validation(&mut slot, candidate, instance, member)?;
        instance.set(member, slot)?;
        Ok(out)
    }

    fn session<'a>(&'a self, scope: &'a CallScope) -> Session<'a> {
        Session::new(scope, self.capabilities, self.state).with_nested(self)
    }

    fn call_collector(&self) -> OutcomeCollector {
        OutcomeCollector::new(Severity::Error, self.capabilities)
    }

    /// The replacement value of a finished run, if the engine applies corrections.
    fn correction<'o>(&self, out: &'o OutcomeCollector) -> Option<&'o Value> {
        if self.capabilities.contains(Capabilities::MODIFICATION) {
            out.new_value()
        } else {
            None
        }
    }

    /// A rule that can only warn has nothing to say to a caller that takes
    /// neither warnings nor corrections.
    fn can_skip(&self, rule: &RuleHandle) -> bool {
        rule.severity() < Severity::Error
            && !self
                .capabilities
                .intersects(Capabilities::WARNINGS | Capabilities::MODIFICATION)
    }

    fn run_rules(
        &self,
        value: Value,
        rules: &[RuleHandle],
        session: &Session<'_>,
    ) -> VerdictResult<OutcomeCollector> {
        let mut out = self.call_collector();
        let mut working = value;

        for rule in rules {
            if self.can_skip(rule) {
                trace!(rule = rule.name(), "skipping advisory rule");
                continue;
            }
            if rule.requires_instance() && session.instance().is_none() {
                if session.supports(Capabilities::VALIDATE_WITHOUT_OBJECT) {
                    trace!(rule = rule.name(), "skipping rule that needs an instance");
                } else {
                    out.push(with_context(
                        Outcome::configuration_error(format!(
                            "rule '{}' needs an owning instance to validate {}",
                            rule.name(),
                            session.label()
                        )),
                        rule.name(),
                        session,
                    ));
                }
                continue;
            }

            let mut rule_out = session.collector(rule.severity());
            rule.check(&working, session, &mut rule_out)?;
            if rule_out.is_empty() {
                continue;
            }

            let mut merged = rule_out.merged();
            if self.capabilities.contains(Capabilities::MODIFICATION) {
                if let Some(corrected) = merged.new_value() {
                    working = corrected.clone();
                }
            } else {
                merged = merged.without_new_value();
            }
            trace!(rule = rule.name(), severity = %merged.severity(), "rule checked");

            if !is_silent(&merged) {
                out.push(with_context(merged, rule.name(), session));
            }
        }
        Ok(out)
    }

    fn collect_object(
        &self,
        instance: &ObjectRef,
        session: &Session<'_>,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        let type_name = instance.type_name();

        for member in instance.members()? {
            let rules = self.registry.rules_for(type_name, &member);
            if rules.is_empty() {
                continue;
            }
            let Some(value) = instance.get(&member)? else {
                out.push(missing_member(instance, &member));
                continue;
            };

            let display = self.registry.display_name(type_name, &member);
            let member_session = session.clone().with_member(Some(member.as_str()), display);
            let mut member_out = self.run_rules(value, rules, &member_session)?;

            if let Some(corrected) = self.correction(&member_out).cloned() {
                if corrected.is_scalar() {
                    self.write_back(instance, &member, corrected, &mut member_out)?;
                }
            }

            let merged = member_out.merged().without_new_value();
            if !is_silent(&merged) {
                let label = display.unwrap_or(member.as_str());
                out.push(merged.namespaced(label).with_member(member.as_str()));
            }
        }

        let type_rules = self.registry.type_rules_for(type_name);
        if !type_rules.is_empty() {
            let object_out = self.run_rules(Value::Object(instance.clone()), type_rules, session)?;
            let merged = object_out.merged().without_new_value();
            if !is_silent(&merged) {
                out.push(merged);
            }
        }
        Ok(())
    }

    /// Store a corrected value on the object. A rejected write becomes a
    /// configuration error; a busy object is a usage error and propagates.
    fn write_back(
        &self,
        instance: &ObjectRef,
        member: &str,
        corrected: Value,
        out: &mut OutcomeCollector,
    ) -> VerdictResult<()> {
        match instance.set(member, corrected) {
            Ok(()) => {
                trace!(type_name = instance.type_name(), member, "correction applied");
                Ok(())
            }
            Err(err @ VerdictError::ObjectBusy { .. }) => Err(err),
            Err(err) => {
                out.push(
                    Outcome::configuration_error(format!("cannot apply correction: {err}"))
                        .with_member(member),
                );
                Ok(())
            }
        }
    }
}

impl INestedValidator for Validator {
    fn validate_nested(
        &self,
        object: &ObjectRef,
        parent: &Session<'_>,
    ) -> VerdictResult<OutcomeCollector> {
        let mut out = parent.collector(Severity::Error);
        if let Some(max_depth) = self.config.max_depth {
            if parent.depth() > max_depth {
                out.push(Outcome::configuration_error(format!(
                    "nesting depth limit of {max_depth} exceeded at {}",
                    object.type_name()
                )));
                return Ok(out);
            }
        }
        trace!(type_name = object.type_name(), depth = parent.depth(), "validate_nested");
        let session = parent.for_object(object.clone());
        self.collect_object(object, &session, &mut out)?;
        Ok(out)
    }
}

fn with_context(outcome: Outcome, rule: &str, session: &Session<'_>) -> Outcome {
    let outcome = outcome.with_rule(rule);
    match session.member_name() {
        Some(member) => outcome.with_member(member),
        None => outcome,
    }
}

/// Plain success carrying nothing for the caller.
fn is_silent(outcome: &Outcome) -> bool {
    outcome.severity() == Severity::None
        && outcome.text().is_empty()
        && outcome.new_value().is_none()
}

fn missing_member(instance: &ObjectRef, member: &str) -> Outcome {
    Outcome::configuration_error(format!(
        "member '{member}' not found on {}",
        instance.type_name()
    ))
    .with_member(member)
}
