use axum::Router;
use domain_users::{UserService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = UserService::new(state.users.clone());
    handlers::router(service)
}
