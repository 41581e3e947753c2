//! # verdict-core
//!
//! Foundation crate for the Verdict validation engine.
//! Defines the severity scale, comparison operators, capability flags, the dynamic
//! value model, outcomes and their collector, the per-call session, the rule
//! trait, errors, config, and constants.
//! The engine crate and every rule implementation depend on this.

pub mod capabilities;
pub mod compare;
pub mod config;
pub mod constants;
pub mod errors;
pub mod outcome;
pub mod session;
pub mod severity;
pub mod traits;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use capabilities::{Capabilities, ValidationState};
pub use compare::CompareOp;
pub use config::VerdictConfig;
pub use errors::{VerdictError, VerdictResult};
pub use outcome::{Outcome, OutcomeCollector};
pub use session::{get_capabilities, get_state, AncestorGuard, CallScope, ScratchKey, Session};
pub use severity::Severity;
pub use traits::{INestedValidator, IRule, RuleHandle};
pub use value::{ObjectId, ObjectRef, Record, Validatable, Value};
