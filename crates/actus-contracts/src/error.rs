//! Error types for contract operations.

use thiserror::Error;

use actus_core::error::ActusError;
use actus_core::types::EventType;
use actus_math::MathError;

/// A specialized Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors that can occur while scheduling or processing a contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The terms record is internally inconsistent.
    #[error("Invalid contract terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// An event needs a market observation that was not supplied.
    #[error("Missing market observation for {event_type} event")]
    MissingObservation {
        /// The event that required the observation.
        event_type: EventType,
    },

    /// The payoff function does not cover this event type.
    #[error("Unsupported event type {event_type} for this contract")]
    UnsupportedEvent {
        /// The offending event type.
        event_type: EventType,
    },

    /// Fixed-point arithmetic failed.
    #[error("Arithmetic error: {0}")]
    Math(#[from] MathError),

    /// A core date or cycle operation failed.
    #[error("Core error: {0}")]
    Core(#[from] ActusError),
}

impl ContractError {
    /// Creates an [`ContractError::InvalidTerms`] error.
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        ContractError::InvalidTerms {
            reason: reason.into(),
        }
    }
}
