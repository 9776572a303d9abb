//! Error types for fixed-point arithmetic.
//!
//! Arithmetic failures are never clamped or rounded away: a result that
//! cannot be represented exactly aborts the computation and surfaces to
//! the caller.

use thiserror::Error;

/// A specialized Result type for fixed-point operations.
pub type MathResult<T> = Result<T, MathError>;

/// Failure modes of fixed-point arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The exact result does not fit the 256-bit signed value range.
    #[error("Fixed-point overflow in {op}")]
    Overflow {
        /// Operation that overflowed.
        op: &'static str,
    },

    /// The exact result is non-zero but truncates to zero raw units.
    #[error("Fixed-point granularity loss in {op}: result not representable at 10^-18")]
    GranularityLoss {
        /// Operation that lost precision.
        op: &'static str,
    },

    /// Division by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A decimal literal could not be parsed exactly.
    #[error("Invalid decimal literal: {literal}")]
    InvalidLiteral {
        /// The offending input.
        literal: String,
    },
}

impl MathError {
    /// Creates an overflow error for the named operation.
    #[must_use]
    pub fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }

    /// Creates a granularity-loss error for the named operation.
    #[must_use]
    pub fn granularity_loss(op: &'static str) -> Self {
        Self::GranularityLoss { op }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::overflow("multiply");
        assert!(err.to_string().contains("multiply"));

        let err = MathError::granularity_loss("divide");
        assert!(err.to_string().contains("10^-18"));
    }
}
