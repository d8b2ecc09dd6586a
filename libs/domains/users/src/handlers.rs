use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::{send_json, AppError, Envelope};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::UserError;
use crate::models::{CreateUser, UpdateUser, User};
use crate::service::UserService;
use crate::store::UserStore;

pub const CREATE_BODY_ERROR: &str = "Please provide FirstName LastName and bio for the user";
pub const UPDATE_BODY_ERROR: &str = "Please provide FirstName and bio for the user";
pub const SAVE_ERROR: &str = "There was an error while saving the user to the database";

/// `{"data": User}`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UserEnvelope {
    data: User,
}

/// `{"data": User | null}`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct OptionalUserEnvelope {
    data: Option<User>,
}

/// `{"data": [User]}`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UserListEnvelope {
    data: Vec<User>,
}

/// `{"message": "..."}`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct MessageEnvelope {
    message: String,
}

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(
        User,
        CreateUser,
        UpdateUser,
        UserEnvelope,
        OptionalUserEnvelope,
        UserListEnvelope,
        MessageEnvelope
    )),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// Create a new user
///
/// The body is read as JSON whatever its `Content-Type`.
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Body undecodable or a required field is empty", body = MessageEnvelope),
        (status = 500, description = "User could not be saved", body = MessageEnvelope)
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let input: CreateUser = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "failed to decode create user body");
        AppError::BadRequest(CREATE_BODY_ERROR.to_string())
    })?;

    let user = service.create_user(input).await.map_err(|e| match e {
        UserError::Internal(_) => AppError::InternalServerError(SAVE_ERROR.to_string()),
        other => other.into(),
    })?;

    Ok(send_json(&Envelope::data(user), StatusCode::CREATED))
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users, unordered", body = UserListEnvelope)
    )
)]
async fn list_users<S: UserStore>(State(service): State<Arc<UserService<S>>>) -> Response {
    let users = service.list_users().await;
    send_json(&Envelope::data(users), StatusCode::OK)
}

/// Get a user by ID
///
/// A malformed or unknown ID answers 200 with `null` data.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or null when absent", body = OptionalUserEnvelope)
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> Response {
    let user = service.get_user(&id).await;
    send_json(&Envelope::data(user), StatusCode::OK)
}

/// Update a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated, empty envelope"),
        (status = 400, description = "first_name or biography is empty", body = MessageEnvelope),
        (status = 404, description = "No user with this ID", body = MessageEnvelope),
        (status = 422, description = "Body undecodable", body = MessageEnvelope),
        (status = 500, description = "Unexpected store failure", body = MessageEnvelope)
    )
)]
async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let input: UpdateUser = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "failed to decode update user body");
        AppError::UnprocessableEntity(UPDATE_BODY_ERROR.to_string())
    })?;

    service.update_user(&id, input).await?;

    Ok(send_json(&Envelope::empty(), StatusCode::OK))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted, empty body"),
        (status = 404, description = "No user with this ID", body = MessageEnvelope),
        (status = 500, description = "Unexpected store failure", body = MessageEnvelope)
    )
)]
async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    service.delete_user(&id).await?;
    Ok(StatusCode::OK.into_response())
}
