//! Relational operator shared by every rule that needs less/equal/greater semantics.
//!
//! `CompareOp` is a flag set over `LESS_THAN`, `EQUAL` and `GREATER_THAN`; composite
//! operators are unions (`NOT_EQUAL = LESS_THAN | GREATER_THAN`, `ANY` = all three,
//! empty = none). [`CompareOp::evaluate`] performs a three-way comparison through
//! [`PartialOrd`] and tests every flag present in the operator against the result.
//!
//! Values that are not mutually comparable are never equal and never ordered:
//! `NOT_EQUAL` holds, `EQUAL` does not, and every other operator is an error.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::errors::{CompareError, ConfigError};

bitflags! {
    /// Relational operator as a set of accepted orderings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CompareOp: u8 {
        const LESS_THAN = 0b001;
        const EQUAL = 0b010;
        const GREATER_THAN = 0b100;

        const LESS_THAN_OR_EQUAL = Self::LESS_THAN.bits() | Self::EQUAL.bits();
        const NOT_EQUAL = Self::LESS_THAN.bits() | Self::GREATER_THAN.bits();
        const GREATER_THAN_OR_EQUAL = Self::GREATER_THAN.bits() | Self::EQUAL.bits();
        const ANY = Self::LESS_THAN.bits() | Self::EQUAL.bits() | Self::GREATER_THAN.bits();
    }
}

impl CompareOp {
    /// The operator that accepts nothing.
    pub const NONE: CompareOp = CompareOp::empty();

    /// Evaluate `a <op> b`.
    ///
    /// `ANY` and `NONE` short-circuit without comparing. Otherwise the values are
    /// compared once; incomparable values satisfy only `NOT_EQUAL`, fail `EQUAL`,
    /// and return [`CompareError::Incomparable`] for any other operator.
    pub fn evaluate<T>(self, a: &T, b: &T) -> Result<bool, CompareError>
    where
        T: PartialOrd + fmt::Debug + ?Sized,
    {
        if self == Self::ANY {
            return Ok(true);
        }
        if self.is_empty() {
            return Ok(false);
        }

        match a.partial_cmp(b) {
            Some(ordering) => Ok(self.contains(Self::from_ordering(ordering))),
            None if self == Self::NOT_EQUAL => Ok(true),
            None if self == Self::EQUAL => Ok(false),
            None => Err(CompareError::Incomparable {
                op: self.to_string(),
                left: format!("{a:?}"),
                right: format!("{b:?}"),
            }),
        }
    }

    /// The single flag corresponding to a comparison result.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::LESS_THAN,
            Ordering::Equal => Self::EQUAL,
            Ordering::Greater => Self::GREATER_THAN,
        }
    }

    /// The operator accepting exactly the orderings this one rejects.
    pub fn negate(self) -> Self {
        self.complement()
    }

    pub fn symbol(self) -> &'static str {
        match self.bits() {
            0b000 => "none",
            0b001 => "<",
            0b010 => "==",
            0b011 => "<=",
            0b100 => ">",
            0b101 => "!=",
            0b110 => ">=",
            _ => "any",
        }
    }
}

impl Default for CompareOp {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<" | "lt" | "less_than" => Ok(Self::LESS_THAN),
            "<=" | "le" | "less_than_or_equal" => Ok(Self::LESS_THAN_OR_EQUAL),
            "==" | "=" | "eq" | "equal" => Ok(Self::EQUAL),
            "!=" | "<>" | "ne" | "not_equal" => Ok(Self::NOT_EQUAL),
            ">" | "gt" | "greater_than" => Ok(Self::GREATER_THAN),
            ">=" | "ge" | "greater_than_or_equal" => Ok(Self::GREATER_THAN_OR_EQUAL),
            "any" => Ok(Self::ANY),
            "none" => Ok(Self::NONE),
            other => Err(ConfigError::InvalidValue {
                field: "compare_op".into(),
                message: format!("unknown comparison operator '{other}'"),
            }),
        }
    }
}
