use crate::severity::Severity;

use super::{CompareError, ConfigError};

/// Top-level error for the Verdict workspace.
///
/// A failing validation is normally reported through outcomes; it only becomes
/// an error when a caller asks for it (`fail_if_invalid`, `set_with_validation`).
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error("validation failed ({severity}): {message}")]
    Invalid { severity: Severity, message: String },

    #[error("comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("object of type {type_name} is already borrowed")]
    ObjectBusy { type_name: String },

    #[error("member '{member}' not found on {type_name}")]
    MemberNotFound { type_name: String, member: String },

    #[error("member '{member}' on {type_name} is read-only")]
    ReadOnlyMember { type_name: String, member: String },

    #[error("member '{member}' on {type_name} rejected the value: {reason}")]
    Rejected {
        type_name: String,
        member: String,
        reason: String,
    },
}

impl VerdictError {
    /// Whether this error is a failed validation rather than a usage problem.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// The merged validation message, for [`VerdictError::Invalid`].
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message, .. } => Some(message),
            _ => None,
        }
    }
}
