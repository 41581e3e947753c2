//! Feature negotiation between the caller and the rules.

use bitflags::bitflags;

bitflags! {
    /// Optional behaviours a caller declares it supports for one validation call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Non-error outcomes are meaningful to the caller.
        const WARNINGS = 0b001;
        /// The caller applies replacement values.
        const MODIFICATION = 0b010;
        /// A bare value without an owning instance may be validated.
        const VALIDATE_WITHOUT_OBJECT = 0b100;
    }
}

impl Capabilities {
    /// True when the caller supports every capability.
    pub fn is_everything(self) -> bool {
        self == Self::all()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

bitflags! {
    /// Transient flags describing how the value being validated came to be.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValidationState: u8 {
        /// The value was just entered or edited by an end actor.
        const LIVE_INPUT = 0b001;
    }
}

impl ValidationState {
    pub fn is_live_input(self) -> bool {
        self.contains(Self::LIVE_INPUT)
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::empty()
    }
}
