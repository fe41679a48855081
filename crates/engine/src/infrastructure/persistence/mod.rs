//! SQLite persistence adapters.

mod character_repository;
mod legacy;

pub use character_repository::SqliteCharacterRepo;
pub use legacy::migrate_legacy_document;
