//! HTTP adapter for the record store (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use shinobi_domain::{Character, CharacterSheet, Clan, ConditionSet, NinjaClass, XpTable};
use shinobi_shared::{
    CreateCharacterRequest, DiceRollQuery, DiceRollResponse, ErrorResponse, QuickStatsRequest,
    UpdateCharacterRequest, XpUpdateRequest,
};

use crate::config::PlayerConfig;
use crate::ports::outbound::{RecordStorePort, StoreError};

/// Talks to the engine's `/api` routes.
#[derive(Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: Url,
}

impl HttpRecordStore {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    /// Base URL plus `api/<segments..>`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "Record store rejected request");
        Err(error_for(status, &body))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, StoreError> {
        let url = self.endpoint(segments)?;
        self.json(self.client.get(url)).await
    }
}

/// Map a non-success response to a `StoreError`, preferring the `detail` field.
fn error_for(status: StatusCode, body: &str) -> StoreError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::NOT_FOUND {
        StoreError::NotFound(detail)
    } else {
        StoreError::Rejected {
            status: status.as_u16(),
            detail,
        }
    }
}

#[async_trait]
impl RecordStorePort for HttpRecordStore {
    async fn list_clans(&self) -> Result<Vec<Clan>, StoreError> {
        self.get(&["clans"]).await
    }

    async fn get_clan(&self, id: &str) -> Result<Clan, StoreError> {
        self.get(&["clans", id]).await
    }

    async fn list_classes(&self) -> Result<Vec<NinjaClass>, StoreError> {
        self.get(&["classes"]).await
    }

    async fn get_class(&self, id: &str) -> Result<NinjaClass, StoreError> {
        self.get(&["classes", id]).await
    }

    async fn conditions(&self) -> Result<ConditionSet, StoreError> {
        self.get(&["conditions"]).await
    }

    async fn xp_table(&self) -> Result<XpTable, StoreError> {
        self.get(&["xp-table"]).await
    }

    async fn list_characters(&self) -> Result<Vec<Character>, StoreError> {
        self.get(&["characters"]).await
    }

    async fn get_character(&self, id: &str) -> Result<Character, StoreError> {
        self.get(&["characters", id]).await
    }

    async fn get_shared_character(&self, share_id: &str) -> Result<Character, StoreError> {
        self.get(&["characters", "share", share_id]).await
    }

    async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<Character, StoreError> {
        let url = self.endpoint(&["characters"])?;
        self.json(self.client.post(url).json(request)).await
    }

    async fn update_character(
        &self,
        id: &str,
        request: &UpdateCharacterRequest,
    ) -> Result<Character, StoreError> {
        let url = self.endpoint(&["characters", id])?;
        self.json(self.client.put(url).json(request)).await
    }

    async fn delete_character(&self, id: &str) -> Result<(), StoreError> {
        let url = self.endpoint(&["characters", id])?;
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn get_sheet(&self, id: &str) -> Result<CharacterSheet, StoreError> {
        self.get(&["characters", id, "sheet"]).await
    }

    async fn get_shared_sheet(&self, share_id: &str) -> Result<CharacterSheet, StoreError> {
        self.get(&["characters", "share", share_id, "sheet"]).await
    }

    async fn update_quick_stats(
        &self,
        id: &str,
        request: &QuickStatsRequest,
    ) -> Result<(), StoreError> {
        let url = self.endpoint(&["characters", id, "quick-stats"])?;
        self.send(self.client.patch(url).json(request))
            .await
            .map(|_| ())
    }

    async fn update_xp(&self, id: &str, xp: u32) -> Result<Character, StoreError> {
        let url = self.endpoint(&["characters", id, "xp"])?;
        self.json(self.client.put(url).json(&XpUpdateRequest { xp }))
            .await
    }

    async fn roll_dice(&self, query: &DiceRollQuery) -> Result<DiceRollResponse, StoreError> {
        let url = self.endpoint(&["roll-dice"])?;
        let count = query.count.to_string();
        self.json(
            self.client
                .post(url)
                .query(&[("dice_type", query.dice_type.as_str()), ("count", count.as_str())]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base: &str) -> HttpRecordStore {
        HttpRecordStore::new(Url::parse(base).unwrap(), Duration::from_secs(1))
    }

    #[test]
    fn endpoints_are_joined_under_api() {
        let store = store("http://localhost:8001");
        assert_eq!(
            store.endpoint(&["characters", "abc", "sheet"]).unwrap().as_str(),
            "http://localhost:8001/api/characters/abc/sheet"
        );
    }

    #[test]
    fn endpoints_keep_a_base_path_prefix() {
        let store = store("https://ninja.example/rpg/");
        assert_eq!(
            store.endpoint(&["xp-table"]).unwrap().as_str(),
            "https://ninja.example/rpg/api/xp-table"
        );
    }

    #[test]
    fn path_segments_are_escaped() {
        let store = store("http://localhost:8001");
        assert_eq!(
            store.endpoint(&["characters", "a/b"]).unwrap().as_str(),
            "http://localhost:8001/api/characters/a%2Fb"
        );
    }

    #[test]
    fn not_found_carries_server_detail() {
        let err = error_for(StatusCode::NOT_FOUND, r#"{"detail":"Personagem não encontrado"}"#);
        assert_eq!(err, StoreError::NotFound("Personagem não encontrado".to_string()));
    }

    #[test]
    fn other_statuses_are_rejections() {
        let err = error_for(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(
            err,
            StoreError::Rejected {
                status: 502,
                detail: "upstream down".to_string()
            }
        );
    }
}
