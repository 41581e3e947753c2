mod nested;
mod rule;

pub use nested::INestedValidator;
pub use rule::{IRule, RuleHandle};
