//! Errors raised by the numeric computations.

use thiserror::Error;

/// Failure of a pure computation.
///
/// `Negative` and `Empty` are validation failures: the input was well-formed
/// but outside the domain of the function. `NonFinite` means a float result
/// cannot be represented as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("Input must be non-negative, got {0}")]
    Negative(i64),

    #[error("Input sequence is empty")]
    Empty,

    #[error("Result is not a finite number")]
    NonFinite,
}

impl ComputeError {
    /// Whether the input was well-formed but semantically out of range.
    pub fn is_validation(&self) -> bool {
        matches!(self, ComputeError::Negative(_) | ComputeError::Empty)
    }
}
