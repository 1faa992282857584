use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Value, json};
use thiserror::Error;

use crate::models::FieldErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    /// Field-level validation failure of a request body.
    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Job queue error: {0}")]
    JobQueueError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::JobQueueError(_) => "JOB_QUEUE_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }

    /// JSON error body; `message` overrides the default client-facing text.
    pub fn error_body(&self, message: Option<&str>) -> Value {
        let default_message = match self {
            AppError::Validation(_) => "Invalid input".to_string(),
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::JobQueueError(msg) => msg.clone(),
            AppError::DatabaseError(_) => "Database error".to_string(),
            _ => "Internal server error".to_string(),
        };
        let mut error = json!({
            "code": self.error_code(),
            "message": message.map(str::to_string).unwrap_or(default_message),
        });
        if let AppError::Validation(fields) = self {
            error["details"] = json!(fields);
        }
        json!({
            "success": false,
            "error": error
        })
    }

    fn log(&self) {
        match self {
            AppError::Validation(fields) => log::warn!("Validation error: {fields}"),
            AppError::ValidationError(msg) => log::warn!("Validation error: {msg}"),
            AppError::NotFound(msg) => log::debug!("Not found: {msg}"),
            AppError::JobQueueError(msg) => log::error!("Job queue error: {msg}"),
            AppError::DatabaseError(err) => log::error!("Database error: {err}"),
            _ => log::error!("Internal error: {self}"),
        }
    }

    /// Renders this error with an explicit status, bypassing [`ResponseError::status_code`].
    pub fn to_response(&self, status: StatusCode, message: Option<&str>) -> HttpResponse {
        self.log();
        HttpResponse::build(status).json(self.error_body(message))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::JobQueueError(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(self.status_code(), None)
    }
}
