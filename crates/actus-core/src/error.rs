//! Error types for the ACTUS core.
//!
//! Schedule-generation edge cases (segment/cycle non-overlap, inverted
//! segments) are normal outcomes represented as empty sequences, not
//! errors; the variants here cover genuine input contract violations
//! and propagated arithmetic failures.

use thiserror::Error;

use actus_math::MathError;

/// A specialized Result type for ACTUS core operations.
pub type ActusResult<T> = Result<T, ActusError>;

/// The main error type for ACTUS core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActusError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A recurring cycle with a zero-quantity period.
    #[error("Invalid cycle: {reason}")]
    InvalidCycle {
        /// Reason for invalidity.
        reason: String,
    },

    /// An encoded event carries an unknown event-type tag.
    #[error("Invalid event encoding: unknown event type tag {tag}")]
    InvalidEventTag {
        /// The unrecognized tag byte.
        tag: u8,
    },

    /// Fixed-point arithmetic failure.
    #[error("Arithmetic error: {0}")]
    Math(#[from] MathError),
}

impl ActusError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid cycle error.
    #[must_use]
    pub fn invalid_cycle(reason: impl Into<String>) -> Self {
        Self::InvalidCycle {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActusError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_math_error_conversion() {
        let err: ActusError = MathError::DivisionByZero.into();
        assert!(err.to_string().contains("Division by zero"));
    }
}
