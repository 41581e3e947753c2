// Single source of truth for all default values.

// --- Validation ---
pub const DEFAULT_WARNINGS: bool = true;
pub const DEFAULT_MODIFICATION: bool = true;
pub const DEFAULT_VALIDATE_WITHOUT_OBJECT: bool = true;
pub const DEFAULT_LIVE_INPUT: bool = false;
pub const DEFAULT_MAX_DEPTH: Option<usize> = None;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
