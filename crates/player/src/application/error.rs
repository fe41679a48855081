//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer
//! and how each class of failure is recovered from. No failure is fatal: every
//! one leaves prior state intact and can be retried by the user.

use crate::ports::outbound::StoreError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Local check failed before any request was made
    #[error("{0}")]
    Validation(String),
    /// Server answered 404
    #[error("Not found: {0}")]
    NotFound(String),
    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
    /// Request failed to send or timed out
    #[error("Request error: {0}")]
    Request(String),
    /// Failed to parse response data
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(detail) => ServiceError::NotFound(detail),
            StoreError::Rejected { status, detail } => ServiceError::ServerError {
                status,
                message: detail,
            },
            StoreError::Transport(msg) => ServiceError::Request(msg),
            StoreError::Decode(msg) => ServiceError::ParseError(msg),
        }
    }
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}

/// Where a failure happened, which decides how the client recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Clans, classes, conditions or the XP table could not be fetched
    ReferenceData,
    /// A character (or the character list) could not be loaded
    CharacterFetch,
    /// Create, update, delete or a stat patch was not stored
    Save,
    /// A required field is missing; nothing was sent
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Render with empty lists and the default XP table
    UseDefaults,
    /// Navigate back to the character list
    RedirectToDashboard,
    /// Keep the draft or edit state so the user can retry
    PreserveDraft,
    /// Keep the user on the current step
    BlockNavigation,
}

impl FailureKind {
    pub fn recovery(self) -> Recovery {
        match self {
            FailureKind::ReferenceData => Recovery::UseDefaults,
            FailureKind::CharacterFetch => Recovery::RedirectToDashboard,
            FailureKind::Save => Recovery::PreserveDraft,
            FailureKind::Validation => Recovery::BlockNavigation,
        }
    }

    /// Validation failures only disable the action; everything else is announced.
    pub fn notifies(self) -> bool {
        !matches!(self, FailureKind::Validation)
    }
}

/// A classified service failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct Failure {
    pub kind: FailureKind,
    pub error: ServiceError,
}

impl Failure {
    pub fn new(kind: FailureKind, error: impl Into<ServiceError>) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }

    pub fn recovery(&self) -> Recovery {
        self.kind.recovery()
    }
}
