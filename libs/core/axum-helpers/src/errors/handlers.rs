use axum::{http::StatusCode, response::Response};

use super::messages;
use crate::envelope::{send_json, Envelope};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    send_json(
        &Envelope::error(messages::NOT_FOUND_RESOURCE),
        StatusCode::NOT_FOUND,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    send_json(
        &Envelope::error(messages::METHOD_NOT_ALLOWED),
        StatusCode::METHOD_NOT_ALLOWED,
    )
}
