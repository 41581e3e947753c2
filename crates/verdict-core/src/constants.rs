/// Verdict version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix for outcomes caused by a misconfigured rule or member rather than bad input.
pub const CONFIGURATION_ERROR_PREFIX: &str = "Configuration error: ";

/// Separator between the member label and the message of a namespaced outcome.
pub const MEMBER_SEPARATOR: &str = ": ";

/// Separator between merged outcome messages.
pub const MESSAGE_SEPARATOR: &str = "\n";

/// Type name given to records built from JSON objects.
pub const JSON_OBJECT_TYPE: &str = "object";

/// Environment variable read by the tracing setup.
pub const LOG_ENV_VAR: &str = "VERDICT_LOG";
