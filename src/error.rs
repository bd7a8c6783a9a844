//! Error types for the fallible helpers

/// Failure of a delayed square.
///
/// `Clone` so a single resolution can be replayed to every observer of a
/// [`SquareTask`](crate::square::SquareTask).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareError {
    /// The input was below zero.
    #[error("Negative number not allowed")]
    NegativeInput,
}

impl SquareError {
    /// Check if this error is due to a negative input
    pub fn is_negative_input(&self) -> bool {
        matches!(self, Self::NegativeInput)
    }
}

/// Returned when a weekday name cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown weekday: {input:?}")]
pub struct ParseWeekdayError {
    pub(crate) input: String,
}

impl ParseWeekdayError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
