use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{
    create_cors_layer, panic_response, request_id_layers, security_headers, REQUEST_ID_HEADER,
};
use super::shutdown::shutdown_signal;
use axum::{extract::Request, http::StatusCode, middleware, Router};
use core_config::server::ServerConfig;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, serving `T`'s document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - 404 / 405 fallbacks answering with a `{"message": ..}` envelope
/// - Request ids (`x-request-id`), generated when the client sends none
/// - Request tracing, with the request id on the span
/// - Panic recovery (`500` envelope instead of a dropped connection)
/// - Body read timeout and response timeout from `server_config`; a slow
///   handler answers `408` with an empty body
/// - Security headers, and CORS when origins are configured
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestBodyTimeoutLayer::new(server_config.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.write_timeout,
        ))
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = create_cors_layer(&server_config.allowed_origins)? {
        info!(
            "CORS configured with allowed origins: {}",
            server_config.allowed_origins.join(",")
        );
        router = router.layer(cors);
    }

    let router = router
        .layer(propagate_request_id)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(set_request_id);

    Ok(router)
}
