//! Repository port traits for database access.

use async_trait::async_trait;
use shinobi_domain::{Character, CharacterId, ShareId};

use super::error::RepoError;

/// Document store for characters. Last writer wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn get_by_share_id(&self, share_id: ShareId) -> Result<Option<Character>, RepoError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
    /// Insert or replace.
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError>;
}
