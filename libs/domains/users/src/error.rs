use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("The user with the specified ID does not exist")]
    NotFound,

    #[error("Please provide name and bio for the user")]
    InvalidInput,

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => AppError::NotFound(err.to_string()),
            UserError::InvalidInput | UserError::Validation(_) => {
                AppError::BadRequest(err.to_string())
            }
            UserError::Internal(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from(UserError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(UserError::InvalidInput).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(UserError::Validation("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(UserError::Internal("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_client_facing() {
        let app_error = AppError::from(UserError::NotFound);
        assert_eq!(
            app_error.message(),
            "The user with the specified ID does not exist"
        );
        assert_eq!(
            UserError::InvalidInput.to_string(),
            "Please provide name and bio for the user"
        );
    }
}
