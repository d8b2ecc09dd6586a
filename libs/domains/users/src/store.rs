use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Store trait for User persistence
///
/// Identifiers are generated by the store and passed back in as text; a
/// malformed identifier is treated like an absent one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user with a freshly generated identifier
    async fn insert(
        &self,
        first_name: String,
        last_name: String,
        biography: String,
    ) -> UserResult<User>;

    /// All users, in no particular order
    async fn find_all(&self) -> Vec<User>;

    /// Get a user by ID, `None` if absent or malformed
    async fn find_by_id(&self, id: &str) -> Option<User>;

    /// Replace a user's fields. An empty `last_name` keeps the stored one.
    async fn update(
        &self,
        id: &str,
        first_name: String,
        last_name: String,
        biography: String,
    ) -> UserResult<()>;

    /// Delete a user by ID
    async fn delete(&self, id: &str) -> UserResult<()>;
}

/// In-memory implementation of UserStore.
///
/// One mutex guards the whole map and every operation holds it from start to
/// finish. Nothing awaits while the guard is alive.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lookup on a map the caller has already locked.
///
/// `update` and `delete` go through here rather than `find_by_id`, which
/// would try to take the (non-reentrant) lock a second time.
fn lookup_mut<'a>(users: &'a mut HashMap<Uuid, User>, id: &str) -> Option<&'a mut User> {
    let id = Uuid::try_parse(id).ok()?;
    users.get_mut(&id)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(
        &self,
        first_name: String,
        last_name: String,
        biography: String,
    ) -> UserResult<User> {
        let mut users = self.lock();

        let user = loop {
            let candidate = User::new(first_name.clone(), last_name.clone(), biography.clone());
            // A v4 collision with a live key is astronomically unlikely; draw again if it happens.
            if let Entry::Vacant(slot) = users.entry(candidate.id) {
                slot.insert(candidate.clone());
                break candidate;
            }
        };

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn find_all(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    async fn find_by_id(&self, id: &str) -> Option<User> {
        let id = Uuid::try_parse(id).ok()?;
        self.lock().get(&id).cloned()
    }

    async fn update(
        &self,
        id: &str,
        first_name: String,
        last_name: String,
        biography: String,
    ) -> UserResult<()> {
        let mut users = self.lock();
        let user = lookup_mut(&mut users, id).ok_or(UserError::NotFound)?;

        if first_name.is_empty() || biography.is_empty() {
            return Err(UserError::InvalidInput);
        }

        user.first_name = first_name;
        if !last_name.is_empty() {
            user.last_name = last_name;
        }
        user.biography = biography;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let mut users = self.lock();
        let key = lookup_mut(&mut users, id)
            .map(|user| user.id)
            .ok_or(UserError::NotFound)?;
        users.remove(&key);

        tracing::info!(user_id = %key, "Deleted user");
        Ok(())
    }
}
