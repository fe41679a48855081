//! Port error types.

/// Errors surfaced by the character document store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The database call itself failed.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored document could not be read back as a character, or a
    /// character could not be written as JSON.
    #[error("Document error: {0}")]
    Document(String),
}

impl RepoError {
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn document(message: impl ToString) -> Self {
        Self::Document(message.to_string())
    }
}
