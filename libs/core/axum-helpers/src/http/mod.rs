//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//! - Request id propagation
//! - Panic recovery

pub mod cors;
pub mod recover;
pub mod request_id;
pub mod security;

pub use cors::create_cors_layer;
pub use recover::panic_response;
pub use request_id::{request_id_layers, REQUEST_ID_HEADER};
pub use security::security_headers;
