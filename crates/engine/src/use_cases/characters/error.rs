//! Character operation errors.

use shinobi_domain::{DiceParseError, DomainError};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during character operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Personagem não encontrado: {0}")]
    NotFound(String),

    #[error("Clã não encontrado: {0}")]
    ClanNotFound(String),

    #[error("Classe não encontrada: {0}")]
    ClassNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid class dice: {0}")]
    Dice(#[from] DiceParseError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
