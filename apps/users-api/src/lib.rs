//! Users API service: wires the users domain into an HTTP server.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

use state::AppState;

/// Full application router: `/api/users`, `/health`, Swagger UI and middleware.
///
/// # Errors
/// Fails if the configured CORS origins are invalid.
pub fn app(state: &AppState) -> io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    Ok(router.merge(health_router(state.config.app)))
}
