//! Domain error type.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Rejected input at the domain boundary. Callers map these to 400s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value broke a character invariant (blank name, score below 1, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Text that does not name a known value (ability key, die type)
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Dice(#[from] DiceParseError),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
