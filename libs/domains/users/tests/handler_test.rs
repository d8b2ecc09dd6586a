//! Handler tests for Users domain
//!
//! These drive the domain router directly with `oneshot`, backed by the
//! in-memory store:
//! - Request decoding and the fixed decode-failure messages
//! - Envelope shape of every response
//! - HTTP status codes, including the lookup-miss convention (200 + null)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::handlers::{CREATE_BODY_ERROR, UPDATE_BODY_ERROR};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = UserService::new(InMemoryUserStore::new());
    Router::new().nest("/users", handlers::router(service))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to send a request and read the response as (status, raw body)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_ada(app: &Router) -> Value {
    let (status, body) = send_json(
        app,
        json_request(
            "POST",
            "/users",
            json!({"first_name": "Ada", "last_name": "Lovelace", "biography": "math"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn test_create_get_delete_round_trip() {
    let app = app();

    let created = create_ada(&app).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert_eq!(created["first_name"], "Ada");
    assert_eq!(created["last_name"], "Lovelace");
    assert_eq!(created["biography"], "math");

    let (status, body) = send_json(&app, empty_request("GET", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": created}));

    let (status, bytes) = send(&app, empty_request("DELETE", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());

    // A lookup miss answers 200 with null data, not 404
    let (status, body) = send_json(&app, empty_request("GET", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": null}));
}

#[tokio::test]
async fn test_create_with_malformed_body_returns_400() {
    let app = app();

    let (status, body) = send_json(&app, raw_request("POST", "/users", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": CREATE_BODY_ERROR}));
}

#[tokio::test]
async fn test_create_with_empty_required_field_returns_400() {
    let app = app();

    let (status, body) = send_json(
        &app,
        json_request(
            "POST",
            "/users",
            json!({"first_name": "", "last_name": "Lovelace", "biography": "math"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("first_name"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_list_users() {
    let app = app();

    let (status, body) = send_json(&app, empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));

    create_ada(&app).await;
    create_ada(&app).await;

    let (status, body) = send_json(&app, empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_ne!(users[0]["id"], users[1]["id"]);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_null_data() {
    let app = app();
    create_ada(&app).await;

    let (status, body) = send_json(&app, empty_request("GET", "/users/not-a-uuid")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": null}));
}

#[tokio::test]
async fn test_update_keeps_last_name_when_omitted() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send_json(
        &app,
        json_request("PUT", &uri, json!({"first_name": "Augusta", "biography": "poetry"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (_, body) = send_json(&app, empty_request("GET", &uri)).await;
    assert_eq!(body["data"]["id"], created["id"]);
    assert_eq!(body["data"]["first_name"], "Augusta");
    assert_eq!(body["data"]["last_name"], "Lovelace");
    assert_eq!(body["data"]["biography"], "poetry");
}

#[tokio::test]
async fn test_update_replaces_last_name_when_given() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, _) = send_json(
        &app,
        json_request(
            "PUT",
            &uri,
            json!({"first_name": "Ada", "last_name": "King", "biography": "math"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(&app, empty_request("GET", &uri)).await;
    assert_eq!(body["data"]["last_name"], "King");
}

#[tokio::test]
async fn test_update_with_malformed_body_returns_422() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send_json(&app, raw_request("PUT", &uri, "[1, 2")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"message": UPDATE_BODY_ERROR}));
}

#[tokio::test]
async fn test_update_with_missing_biography_returns_400() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) =
        send_json(&app, json_request("PUT", &uri, json!({"first_name": "Ada"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": "Please provide name and bio for the user"})
    );
}

#[tokio::test]
async fn test_update_unknown_user_returns_404() {
    let app = app();
    let uri = format!("/users/{}", uuid::Uuid::new_v4());

    let (status, body) = send_json(
        &app,
        json_request("PUT", &uri, json!({"first_name": "A", "biography": "B"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "The user with the specified ID does not exist"})
    );
}

#[tokio::test]
async fn test_delete_unknown_user_returns_404() {
    let app = app();

    let (status, body) = send_json(
        &app,
        empty_request("DELETE", &format!("/users/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "The user with the specified ID does not exist"})
    );
}

fn typed_request(method: &str, uri: &str, content_type: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_create_decodes_json_body_regardless_of_content_type() {
    let app = app();
    let ada = json!({"first_name": "Ada", "last_name": "Lovelace", "biography": "math"});

    for content_type in [None, Some("application/x-www-form-urlencoded"), Some("text/plain")] {
        let (status, body) = send_json(
            &app,
            typed_request("POST", "/users", content_type, ada.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "content type {content_type:?}");
        assert_eq!(body["data"]["first_name"], "Ada");
    }

    let (_, body) = send_json(&app, empty_request("GET", "/users")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_decodes_json_body_regardless_of_content_type() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    for content_type in [None, Some("application/x-www-form-urlencoded")] {
        let (status, body) = send_json(
            &app,
            typed_request(
                "PUT",
                &uri,
                content_type,
                json!({"first_name": "Augusta", "biography": "poetry"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "content type {content_type:?}");
        assert_eq!(body, json!({}));
    }

    let (_, body) = send_json(&app, empty_request("GET", &uri)).await;
    assert_eq!(body["data"]["first_name"], "Augusta");
}

#[tokio::test]
async fn test_update_with_null_last_name_keeps_previous() {
    let app = app();
    let created = create_ada(&app).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send_json(
        &app,
        json_request(
            "PUT",
            &uri,
            json!({"first_name": "A", "last_name": null, "biography": "b"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (_, body) = send_json(&app, empty_request("GET", &uri)).await;
    assert_eq!(body["data"]["first_name"], "A");
    assert_eq!(body["data"]["last_name"], "Lovelace");
    assert_eq!(body["data"]["biography"], "b");
}
