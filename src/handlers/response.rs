use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::StatusMessage;
use crate::services::UpdateOutcome;

/// Game resource operations, as far as status mapping cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Delete,
}

impl Operation {
    fn mutates_existing(self) -> bool {
        matches!(
            self,
            Operation::Update | Operation::PartialUpdate | Operation::Delete
        )
    }
}

/// Maps operation outcomes to HTTP responses.
///
/// Strict mode answers a missing game with 404 everywhere and a rejected
/// update with 400. Legacy mode keeps the historical quirks: 400 for a missing
/// game on update/delete and a 200 `Warning` envelope for a rejected update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponsePolicy {
    legacy: bool,
}

impl ResponsePolicy {
    pub fn strict() -> Self {
        Self { legacy: false }
    }

    pub fn legacy() -> Self {
        Self { legacy: true }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            legacy: api.legacy_responses,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    pub fn error_status(&self, operation: Operation, err: &AppError) -> StatusCode {
        use actix_web::ResponseError;

        match err {
            AppError::NotFound(_) if self.legacy && operation.mutates_existing() => {
                StatusCode::BAD_REQUEST
            }
            _ => err.status_code(),
        }
    }

    pub fn error(&self, operation: Operation, err: AppError) -> HttpResponse {
        err.to_response(self.error_status(operation, &err), None)
    }

    pub fn update(&self, outcome: UpdateOutcome) -> HttpResponse {
        match outcome {
            UpdateOutcome::Updated(game) => {
                HttpResponse::Ok().json(StatusMessage::game_updated(&game.name))
            }
            UpdateOutcome::ValidationFailed { game, errors } => {
                let warning = StatusMessage::update_warning(&game.name);
                if self.legacy {
                    HttpResponse::Ok().json(warning)
                } else {
                    AppError::Validation(errors)
                        .to_response(StatusCode::BAD_REQUEST, Some(&warning.message))
                }
            }
        }
    }
}
