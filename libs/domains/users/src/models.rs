use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the store and never changed
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(nullable)]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "biography is required"))]
    pub biography: String,
}

/// DTO for replacing a user's fields.
///
/// An empty, null or missing `last_name` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(nullable)]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub biography: String,
}

// JSON `null` on a text field reads as empty text.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Create a user with a fresh random (v4) identifier
    pub fn new(first_name: String, last_name: String, biography: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            biography,
        }
    }
}
