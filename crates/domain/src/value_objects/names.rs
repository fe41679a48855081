//! Character name newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const MAX_NAME_CHARS: usize = 200;

/// Trimmed, non-blank, at most 200 characters. Deserialization validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match name.trim() {
            "" => Err(DomainError::validation("Character name cannot be empty")),
            trimmed if trimmed.chars().count() > MAX_NAME_CHARS => Err(DomainError::validation(
                format!("Character name cannot exceed {MAX_NAME_CHARS} characters"),
            )),
            trimmed => Ok(Self(trimmed.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_dropped() {
        assert_eq!(CharacterName::new("  Itachi  ").unwrap().as_str(), "Itachi");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(CharacterName::new("").is_err());
        assert!(CharacterName::new(" \t ").is_err());
    }

    #[test]
    fn length_limit_counts_characters() {
        assert!(CharacterName::new("ū".repeat(200)).is_ok());
        assert!(CharacterName::new("a".repeat(201)).is_err());
    }

    #[test]
    fn deserializing_runs_the_same_checks() {
        assert!(serde_json::from_str::<CharacterName>("\"  \"").is_err());
        let name: CharacterName = serde_json::from_str("\" Hinata\"").unwrap();
        assert_eq!(name.to_string(), "Hinata");
    }
}
