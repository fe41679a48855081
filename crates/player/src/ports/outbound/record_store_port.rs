//! Record Store Port - the REST API as seen from the client
//!
//! One method per engine operation. Adapters translate transport failures
//! into `StoreError`; services decide how to surface them.

use async_trait::async_trait;

use shinobi_domain::{Character, CharacterSheet, Clan, ConditionSet, NinjaClass, XpTable};
use shinobi_shared::{
    CreateCharacterRequest, DiceRollQuery, DiceRollResponse, QuickStatsRequest,
    UpdateCharacterRequest,
};

/// Failure talking to the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// 404 with the server's detail message
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Server rejected request ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// Request never completed (connection, timeout)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    // Reference data
    async fn list_clans(&self) -> Result<Vec<Clan>, StoreError>;
    async fn get_clan(&self, id: &str) -> Result<Clan, StoreError>;
    async fn list_classes(&self) -> Result<Vec<NinjaClass>, StoreError>;
    async fn get_class(&self, id: &str) -> Result<NinjaClass, StoreError>;
    async fn conditions(&self) -> Result<ConditionSet, StoreError>;
    async fn xp_table(&self) -> Result<XpTable, StoreError>;

    // Characters
    async fn list_characters(&self) -> Result<Vec<Character>, StoreError>;
    async fn get_character(&self, id: &str) -> Result<Character, StoreError>;
    async fn get_shared_character(&self, share_id: &str) -> Result<Character, StoreError>;
    async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<Character, StoreError>;
    async fn update_character(
        &self,
        id: &str,
        request: &UpdateCharacterRequest,
    ) -> Result<Character, StoreError>;
    async fn delete_character(&self, id: &str) -> Result<(), StoreError>;
    async fn get_sheet(&self, id: &str) -> Result<CharacterSheet, StoreError>;
    async fn get_shared_sheet(&self, share_id: &str) -> Result<CharacterSheet, StoreError>;
    async fn update_quick_stats(
        &self,
        id: &str,
        request: &QuickStatsRequest,
    ) -> Result<(), StoreError>;
    async fn update_xp(&self, id: &str, xp: u32) -> Result<Character, StoreError>;

    // Dice
    async fn roll_dice(&self, query: &DiceRollQuery) -> Result<DiceRollResponse, StoreError>;
}
