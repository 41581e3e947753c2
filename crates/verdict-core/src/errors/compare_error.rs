/// Errors raised by [`CompareOp::evaluate`](crate::CompareOp::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// An ordering operator was applied to values that have no ordering.
    #[error("operator '{op}' cannot compare {left} with {right}")]
    Incomparable {
        op: String,
        left: String,
        right: String,
    },
}
