use serde::{Deserialize, Serialize};

use super::defaults;
use crate::capabilities::{Capabilities, ValidationState};
use crate::errors::ConfigError;

/// Capabilities and state the host declares for every call made by one engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Non-error outcomes are reported to the caller.
    pub warnings: bool,
    /// Replacement values are applied.
    pub modification: bool,
    /// Bare values without an owning instance may be validated.
    pub validate_without_object: bool,
    /// Values come straight from an end actor.
    pub live_input: bool,
    /// Maximum nesting depth for nested validation. `None` = unbounded.
    pub max_depth: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            warnings: defaults::DEFAULT_WARNINGS,
            modification: defaults::DEFAULT_MODIFICATION,
            validate_without_object: defaults::DEFAULT_VALIDATE_WITHOUT_OBJECT,
            live_input: defaults::DEFAULT_LIVE_INPUT,
            max_depth: defaults::DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationConfig {
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::WARNINGS, self.warnings);
        caps.set(Capabilities::MODIFICATION, self.modification);
        caps.set(
            Capabilities::VALIDATE_WITHOUT_OBJECT,
            self.validate_without_object,
        );
        caps
    }

    pub fn state(&self) -> ValidationState {
        let mut state = ValidationState::empty();
        state.set(ValidationState::LIVE_INPUT, self.live_input);
        state
    }

    /// Build a config that reproduces the given flags.
    pub fn from_flags(capabilities: Capabilities, state: ValidationState) -> Self {
        Self {
            warnings: capabilities.contains(Capabilities::WARNINGS),
            modification: capabilities.contains(Capabilities::MODIFICATION),
            validate_without_object: capabilities.contains(Capabilities::VALIDATE_WITHOUT_OBJECT),
            live_input: state.is_live_input(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "validation.max_depth".into(),
                message: "must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}
