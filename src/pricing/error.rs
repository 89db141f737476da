//! Error types for Black-Scholes pricing and implied volatility.

use std::fmt;

/// Errors raised by parameter derivation and the implied volatility solver.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Volatility, time to expiry or strike is not strictly positive.
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// Solver configuration cannot drive an iteration.
    InvalidConfig {
        /// Description of the rejected setting.
        message: String,
    },

    /// JSON input could not be decoded.
    Deserialization {
        /// Underlying decoder message.
        message: String,
    },

    /// Value could not be encoded to JSON.
    Serialization {
        /// Underlying encoder message.
        message: String,
    },
}

impl PricingError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PricingError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            PricingError::InvalidConfig { message } => {
                write!(f, "invalid solver configuration: {message}")
            }
            PricingError::Deserialization { message } => {
                write!(f, "deserialization error: {message}")
            }
            PricingError::Serialization { message } => {
                write!(f, "serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
