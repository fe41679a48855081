//! Response bodies returned by the REST API

use serde::{Deserialize, Serialize};

/// Plain `{ "message": .. }` body (banner, delete confirmation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful quick-stats patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStatsResponse {
    pub success: bool,
    pub message: String,
}

/// Error body: `{ "detail": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Result of `POST /api/roll-dice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollResponse {
    pub dice_type: String,
    pub count: u8,
    pub rolls: Vec<i32>,
    pub total: i32,
}
