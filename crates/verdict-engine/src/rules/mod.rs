//! Rules the engine itself relies on. Domain rules (lengths, patterns, dates, ...)
//! live with their callers and implement [`IRule`](verdict_core::IRule) directly.

mod compare;
mod nested;

pub use compare::{CompareRule, CompareTarget};
pub use nested::NestedRule;
