use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Layers that assign an `x-request-id` to every request lacking one and echo
/// it back on the response.
///
/// Apply `SetRequestIdLayer` outside the trace layer so the id is visible to
/// the request span.
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid),
        PropagateRequestIdLayer::new(REQUEST_ID_HEADER),
    )
}
