//! # verdict-engine
//!
//! Runs declared rules against objects, members, and bare values.
//!
//! ## Entry points
//! - `validate_object`: every member that carries rules, then object-level rules
//! - `validate_member`: one member, writing a correction back to the object
//! - `validate_value`: a value against an explicit rule list
//! - `set_with_validation`: assign a candidate only if it validates
//!
//! ## Built-in rules
//! - `NestedRule`: recurse into referenced objects without looping on cycles
//! - `CompareRule`: compare against a constant or a sibling member

pub mod engine;
pub mod registry;
pub mod rules;
pub mod tracing_setup;

pub use engine::Validator;
pub use registry::RuleRegistry;
pub use rules::{CompareRule, CompareTarget, NestedRule};
