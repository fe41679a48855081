//! SQLite-backed character storage.
//!
//! Each character is one JSON document. `id` and `share_id` are mirrored
//! into indexed columns for lookups.

use async_trait::async_trait;
use serde_json::Value;
use shinobi_domain::{Character, CharacterId, ShareId};
use sqlx::{Row, SqlitePool};

use super::legacy::migrate_legacy_document;
use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// SQLite implementation of the character document store.
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                share_id TEXT NOT NULL UNIQUE,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_table", e))?;

        Ok(Self { pool })
    }

    /// Decode a stored document, upgrading and rewriting legacy records.
    async fn decode(&self, document: &str, created_at: &str) -> Result<Character, RepoError> {
        let mut doc: Value = serde_json::from_str(document).map_err(RepoError::document)?;
        let migrated = migrate_legacy_document(&mut doc, created_at);
        let character: Character = serde_json::from_value(doc).map_err(RepoError::document)?;

        if migrated {
            self.save(&character).await?;
            tracing::info!(character_id = %character.id, "Migrated legacy character record");
        }

        Ok(character)
    }

    async fn fetch_one(
        &self,
        column: &'static str,
        value: String,
    ) -> Result<Option<Character>, RepoError> {
        let query = format!(
            "SELECT document, created_at FROM characters WHERE {} = ?",
            column
        );
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get", e))?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                let created_at: String = row.get("created_at");
                Ok(Some(self.decode(&document, &created_at).await?))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        self.fetch_one("id", id.to_string()).await
    }

    async fn get_by_share_id(&self, share_id: ShareId) -> Result<Option<Character>, RepoError> {
        self.fetch_one("share_id", share_id.to_string()).await
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let rows = sqlx::query(
            "SELECT document, created_at FROM characters ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list", e))?;

        let mut characters = Vec::with_capacity(rows.len());
        for row in rows {
            let document: String = row.get("document");
            let created_at: String = row.get("created_at");
            characters.push(self.decode(&document, &created_at).await?);
        }
        Ok(characters)
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        let document = serde_json::to_string(character).map_err(RepoError::document)?;

        sqlx::query(
            r#"
            INSERT INTO characters (id, share_id, document, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                share_id = excluded.share_id,
                document = excluded.document,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(character.id.to_string())
        .bind(character.share_id.to_string())
        .bind(document)
        .bind(character.created_at.to_rfc3339())
        .bind(character.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save", e))?;

        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
