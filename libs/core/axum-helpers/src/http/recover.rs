use axum::{
    http::StatusCode,
    response::Response,
};
use std::any::Any;

use crate::envelope::{send_json, Envelope};
use crate::errors::messages;

/// Turns a handler panic into a `500` envelope, for `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");

    send_json(
        &Envelope::error(messages::INTERNAL_ERROR),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
