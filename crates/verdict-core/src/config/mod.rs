pub mod defaults;
mod observability_config;
mod validation_config;

pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration, usually loaded from a `verdict.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictConfig {
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl VerdictConfig {
    /// Parse from TOML; missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()?;
        self.observability.validate()
    }
}
