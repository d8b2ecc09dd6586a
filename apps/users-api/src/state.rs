//! Application state shared by the route builders.

use domain_users::InMemoryUserStore;

/// Created once at startup and lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// The process-wide user store; clones share the same map
    pub users: InMemoryUserStore,
}
