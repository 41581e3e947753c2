use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Graded severity of a validation outcome.
///
/// Totally ordered: `None < Updated < Message < Warning < SevereWarning < Error`.
/// Only `Error` means the value is invalid; everything below is advisory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Success, nothing to report.
    #[default]
    None,
    /// The value was corrected by a rule.
    Updated,
    /// Informational message.
    Message,
    Warning,
    SevereWarning,
    /// The value is invalid.
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Self::None,
        Self::Updated,
        Self::Message,
        Self::Warning,
        Self::SevereWarning,
        Self::Error,
    ];

    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// True for every severity that leaves the value valid.
    pub fn is_valid(self) -> bool {
        self < Self::Error
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Updated => "updated",
            Self::Message => "message",
            Self::Warning => "warning",
            Self::SevereWarning => "severe_warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "success" => Ok(Self::None),
            "updated" => Ok(Self::Updated),
            "message" | "info" => Ok(Self::Message),
            "warning" => Ok(Self::Warning),
            "severe_warning" | "severewarning" => Ok(Self::SevereWarning),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidValue {
                field: "severity".into(),
                message: format!("unknown severity '{other}'"),
            }),
        }
    }
}
