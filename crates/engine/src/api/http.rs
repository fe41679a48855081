//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use shinobi_domain::{Character, CharacterSheet, Clan, ConditionSet, NinjaClass, XpTable};
use shinobi_shared::{
    CreateCharacterRequest, DiceRollQuery, DiceRollResponse, ErrorResponse, HealthResponse,
    MessageResponse, QuickStatsRequest, QuickStatsResponse, UpdateCharacterRequest,
    XpUpdateRequest,
};

use crate::app::App;
use crate::config::CorsOrigins;
use crate::use_cases::characters::CharacterError;
use crate::use_cases::dice::DiceError;
use crate::use_cases::reference::ReferenceError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api", get(banner))
        .route("/api/", get(banner))
        .route("/api/health", get(health))
        // Reference data
        .route("/api/clans", get(list_clans))
        .route("/api/clans/{id}", get(get_clan))
        .route("/api/classes", get(list_classes))
        .route("/api/classes/{id}", get(get_class))
        .route("/api/conditions", get(list_conditions))
        .route("/api/xp-table", get(xp_table))
        // Characters
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/api/characters/{id}/sheet", get(get_sheet))
        .route("/api/characters/{id}/quick-stats", patch(update_quick_stats))
        .route("/api/characters/{id}/xp", put(update_xp))
        .route("/api/characters/share/{share_id}", get(get_shared_character))
        .route("/api/characters/share/{share_id}/sheet", get(get_shared_sheet))
        // Dice
        .route("/api/roll-dice", post(roll_dice))
}

/// CORS for the browser client. Origins that are not valid header values
/// are skipped; if none survive, any origin is allowed.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            if values.is_empty() {
                AllowOrigin::from(Any)
            } else {
                AllowOrigin::list(values)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

async fn banner() -> Json<MessageResponse> {
    Json(MessageResponse::new("Naruto RPG Character Creator API"))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Reference data
// =============================================================================

async fn list_clans(State(app): State<Arc<App>>) -> Json<Vec<Clan>> {
    Json(app.use_cases.reference.clans().to_vec())
}

async fn get_clan(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Clan>, ApiError> {
    let clan = app.use_cases.reference.clan(&id)?;
    Ok(Json(clan.clone()))
}

async fn list_classes(State(app): State<Arc<App>>) -> Json<Vec<NinjaClass>> {
    Json(app.use_cases.reference.classes().to_vec())
}

async fn get_class(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<NinjaClass>, ApiError> {
    let class = app.use_cases.reference.class(&id)?;
    Ok(Json(class.clone()))
}

async fn list_conditions(State(app): State<Arc<App>>) -> Json<ConditionSet> {
    Json(app.use_cases.reference.conditions().clone())
}

async fn xp_table(State(app): State<Arc<App>>) -> Json<XpTable> {
    Json(app.use_cases.reference.xp_table().clone())
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(State(app): State<Arc<App>>) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = app.use_cases.characters.crud.list().await?;
    Ok(Json(characters))
}

async fn create_character(
    State(app): State<Arc<App>>,
    Json(request): Json<CreateCharacterRequest>,
) -> Result<Json<Character>, ApiError> {
    let character = app.use_cases.characters.crud.create(request).await?;
    Ok(Json(character))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let character = app.use_cases.characters.crud.get(&id).await?;
    Ok(Json(character))
}

async fn get_shared_character(
    State(app): State<Arc<App>>,
    Path(share_id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let character = app.use_cases.characters.crud.get_shared(&share_id).await?;
    Ok(Json(character))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCharacterRequest>,
) -> Result<Json<Character>, ApiError> {
    let character = app.use_cases.characters.crud.update(&id, request).await?;
    Ok(Json(character))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app.use_cases.characters.crud.delete(&id).await?;
    Ok(Json(MessageResponse::new("Personagem deletado com sucesso")))
}

async fn get_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterSheet>, ApiError> {
    let sheet = app.use_cases.characters.sheet.by_id(&id).await?;
    Ok(Json(sheet))
}

async fn get_shared_sheet(
    State(app): State<Arc<App>>,
    Path(share_id): Path<String>,
) -> Result<Json<CharacterSheet>, ApiError> {
    let sheet = app.use_cases.characters.sheet.by_share_id(&share_id).await?;
    Ok(Json(sheet))
}

async fn update_quick_stats(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(request): Json<QuickStatsRequest>,
) -> Result<Json<QuickStatsResponse>, ApiError> {
    let response = app
        .use_cases
        .characters
        .quick_stats
        .execute(&id, request)
        .await?;
    Ok(Json(response))
}

async fn update_xp(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(request): Json<XpUpdateRequest>,
) -> Result<Json<Character>, ApiError> {
    let character = app.use_cases.characters.xp.execute(&id, request.xp).await?;
    Ok(Json(character))
}

// =============================================================================
// Dice
// =============================================================================

async fn roll_dice(
    State(app): State<Arc<App>>,
    Query(query): Query<DiceRollQuery>,
) -> Result<Json<DiceRollResponse>, ApiError> {
    let response = app.use_cases.dice.execute(&query)?;
    Ok(Json(response))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        match e {
            CharacterError::NotFound(_) => {
                ApiError::NotFound("Personagem não encontrado".to_string())
            }
            CharacterError::ClanNotFound(_) => ApiError::NotFound("Clã não encontrado".to_string()),
            CharacterError::ClassNotFound(_) => {
                ApiError::NotFound("Classe não encontrada".to_string())
            }
            CharacterError::InvalidInput(msg) => ApiError::BadRequest(msg),
            CharacterError::Domain(e) => ApiError::BadRequest(e.to_string()),
            CharacterError::Dice(e) => ApiError::Internal(e.to_string()),
            CharacterError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ReferenceError> for ApiError {
    fn from(e: ReferenceError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

impl From<DiceError> for ApiError {
    fn from(e: DiceError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
