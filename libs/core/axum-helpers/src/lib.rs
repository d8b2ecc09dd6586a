//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{data, message}` response wrapper and `send_json`
//! - **[`errors`]**: `AppError` and fallback handlers
//! - **[`http`]**: HTTP middleware (CORS, security headers, request ids, panic recovery)
//! - **[`server`]**: router assembly, health check, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod http;
pub mod server;

pub use envelope::{send_json, Envelope};
pub use errors::AppError;
pub use server::{create_app, create_router, health_router, shutdown_signal};
