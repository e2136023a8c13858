//! Error type definitions for curve operations

use thiserror::Error;

/// Primary error type for curve operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-finite, non-integral or out-of-domain input
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A modular slope whose denominator shares a factor with the modulus
    #[error("{value} has no inverse modulo {modulus}")]
    UndefinedInverse {
        value: i64,
        modulus: i64,
    },

    /// A discrete-logarithm search ended without a match
    #[error("{algorithm}: logarithm not found")]
    LogarithmNotFound {
        algorithm: &'static str,
    },
}

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error.
    ///
    /// Variants that carry no context are returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }

    /// Whether this error signals a missing modular inverse
    pub fn is_undefined_inverse(&self) -> bool {
        matches!(self, Self::UndefinedInverse { .. })
    }
}
