//! Users Domain
//!
//! CRUD over user records kept in a process-wide, mutex-guarded map.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelope responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← UserStore trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserStore, UserService};
//!
//! let store = InMemoryUserStore::new();
//! let service = UserService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
