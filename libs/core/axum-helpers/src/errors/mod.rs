pub mod handlers;
pub mod messages;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::{send_json, Envelope};

/// Application error type that can be converted to HTTP responses.
///
/// Every variant carries the human-readable message that ends up in the
/// `message` member of the response envelope. Domain crates convert their own
/// error enums into `AppError` to pick a status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client, without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::InternalServerError(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::InternalServerError(msg) => {
                tracing::error!(status = status.as_u16(), "Internal server error: {}", msg)
            }
            AppError::BadRequest(msg) | AppError::UnprocessableEntity(msg) => {
                tracing::info!(status = status.as_u16(), "Rejected request: {}", msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(status = status.as_u16(), "Not found: {}", msg)
            }
        }

        send_json(&Envelope::error(self.message()), status)
    }
}
