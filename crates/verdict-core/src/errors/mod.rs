mod compare_error;
mod config_error;
mod verdict_error;

pub use compare_error::CompareError;
pub use config_error::ConfigError;
pub use verdict_error::VerdictError;

/// Convenience alias used throughout the workspace.
pub type VerdictResult<T> = Result<T, VerdictError>;
