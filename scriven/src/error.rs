use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrivenError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Upload bytes did not decode as an image. The payload is the internal
    /// cause; the client always sees the fixed "Invalid image file" message.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ScrivenError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            // The duplicate-username status is pinned to 400 by the wire
            // contract, not 409.
            ScrivenError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ScrivenError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ScrivenError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ScrivenError::InvalidImage(cause) => {
                tracing::debug!(cause = %cause, "Rejected undecodable image upload");
                (StatusCode::BAD_REQUEST, "Invalid image file".to_string())
            }
            ScrivenError::OcrUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            internal @ (ScrivenError::Database(_)
            | ScrivenError::Ocr(_)
            | ScrivenError::PasswordHash(_)
            | ScrivenError::Json(_)
            | ScrivenError::Io(_)
            | ScrivenError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ScrivenError>;
