use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::store::UserStore;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a new user after checking required fields are present
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.store
            .insert(input.first_name, input.last_name, input.biography)
            .await
    }

    /// List every user
    pub async fn list_users(&self) -> Vec<User> {
        self.store.find_all().await
    }

    /// Get a user by ID; a miss is not an error
    pub async fn get_user(&self, id: &str) -> Option<User> {
        let user = self.store.find_by_id(id).await;
        if user.is_none() {
            tracing::debug!(user_id = id, "User lookup missed");
        }
        user
    }

    /// Replace a user's fields
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<()> {
        self.store
            .update(id, input.first_name, input.last_name, input.biography)
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        self.store.delete(id).await
    }
}
