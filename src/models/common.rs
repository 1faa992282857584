use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status tag of a [`StatusMessage`]. The casing of each variant is part of
/// the public contract and differs between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EnvelopeStatus {
    /// Returned by create.
    #[serde(rename = "ok")]
    Created,
    /// Returned by update, partial update and delete.
    #[serde(rename = "OK")]
    Ok,
    /// Update rejected by validation (legacy responses only).
    #[serde(rename = "Warning")]
    Warning,
}

/// `{status, message}` envelope returned by the mutating game endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    pub status: EnvelopeStatus,
    #[schema(example = "Game Chess is created! Id: 1")]
    pub message: String,
}

impl StatusMessage {
    pub fn new(status: EnvelopeStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn game_created(name: &str, id: i64) -> Self {
        Self::new(
            EnvelopeStatus::Created,
            format!("Game {name} is created! Id: {id}"),
        )
    }

    pub fn game_updated(name: &str) -> Self {
        Self::new(EnvelopeStatus::Ok, format!("Game: {name} was updated"))
    }

    pub fn game_deleted(name: &str) -> Self {
        Self::new(EnvelopeStatus::Ok, format!("Game {name} is deleted!"))
    }

    pub fn update_warning(name: &str) -> Self {
        Self::new(EnvelopeStatus::Warning, format!("Warning with: {name}"))
    }
}

/// Error body shape, documented for OpenAPI only.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    /// Field name to messages, present on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<std::collections::BTreeMap<String, Vec<String>>>,
}
