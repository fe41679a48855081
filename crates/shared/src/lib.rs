//! Shinobi Sheet Protocol - Shared types for Engine and Player communication
//!
//! Wire-format DTOs for the REST API. The engine deserializes requests and
//! serializes responses with these types; the player does the reverse.
//!
//! Domain vocabulary types (attributes, equipment items, jutsus, the sheet
//! view) are reused as-is rather than mirrored.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateCharacterRequest, DiceRollQuery, QuickStatsRequest, UpdateCharacterRequest,
    XpUpdateRequest,
};
pub use responses::{
    DiceRollResponse, ErrorResponse, HealthResponse, MessageResponse, QuickStatsResponse,
};

pub use shinobi_domain::{Character, CharacterSheet, Clan, ConditionSet, NinjaClass, XpTable};
