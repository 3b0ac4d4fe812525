//! End-to-end tests for the user routes
//!
//! Each test builds the router over its own in-memory SQLite store and
//! drives it in-process with `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use user_crud::connect_data_store;
use user_crud_axum::{StoreConfig, UserStore, user_crud_router};

async fn test_app() -> Router {
    let store = UserStore::connect(&StoreConfig::new("sqlite::memory:"))
        .await
        .expect("Failed to initialize in-memory store");
    user_crud_router(store)
}

/// Send one request and return the status and the parsed JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, user) = send(app, Method::POST, "/userRegistration", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    user
}

fn id_of(user: &Value) -> String {
    user["_id"]
        .as_str()
        .expect("created user should carry an _id")
        .to_string()
}

/// Create, read, update, delete and read again, checking every response body
#[tokio::test]
async fn test_alice_lifecycle() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"name": "Alice", "email": "a@x.com", "password": "secret1"}),
    )
    .await;
    let id = id_of(&created);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["password"], "secret1");

    let (status, body) = send(&app, Method::GET, &format!("/read/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"_id": id, "name": "Alice", "email": "a@x.com", "password": "secret1"}])
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/update/{id}"),
        Some(json!({"name": "Alicia", "email": "a@x.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"_id": id, "name": "Alicia", "email": "a@x.com", "password": "secret1"})
    );

    let (status, body) = send(&app, Method::DELETE, &format!("/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Message": "User deleted successfully"}));

    let (status, body) = send(&app, Method::GET, &format!("/read/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "User not found"}));
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let first = create(&app, json!({"name": "A", "email": "a@x.com", "password": "1"})).await;
    let second = create(&app, json!({"name": "B", "email": "b@x.com", "password": "2"})).await;
    create(&app, json!({"name": "C", "email": "c@x.com", "password": "3"})).await;

    let (_, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    send(&app, Method::DELETE, &format!("/delete/{}", id_of(&second)), None).await;

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("list should be an array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], first);
    assert!(users.iter().all(|u| u["_id"] != second["_id"]));
}

/// Omitted fields on update are cleared, not kept
#[tokio::test]
async fn test_update_overwrites_wholesale() {
    let app = test_app().await;
    let created = create(
        &app,
        json!({"name": "Alice", "email": "a@x.com", "password": "secret1"}),
    )
    .await;
    let id = id_of(&created);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/update/{id}"),
        Some(json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "X");
    assert_eq!(body["email"], Value::Null);
    assert_eq!(body["password"], Value::Null);

    let (_, body) = send(&app, Method::GET, &format!("/read/{id}"), None).await;
    assert_eq!(body[0]["email"], Value::Null);
    assert_eq!(body[0]["password"], Value::Null);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = test_app().await;
    let id = id_of(&create(&app, json!({"name": "A"})).await);

    let (status, _) = send(&app, Method::DELETE, &format!("/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, &format!("/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "User not found"}));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = test_app().await;

    for id in ["64b7f0c2a1e4c9d8f0a1b2c3", "not-a-valid-id"] {
        let (status, body) = send(&app, Method::GET, &format!("/read/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "read {id}");
        assert_eq!(body, json!({"Message": "User not found"}));

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/update/{id}"),
            Some(json!({"name": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "update {id}");

        let (status, _) = send(&app, Method::DELETE, &format!("/delete/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "delete {id}");
    }

    let (_, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_with_missing_fields_stores_nulls() {
    let app = test_app().await;

    let created = create(&app, json!({"email": "only@x.com"})).await;

    assert_eq!(created["name"], Value::Null);
    assert_eq!(created["email"], "only@x.com");
    assert_eq!(created["password"], Value::Null);
}

/// Send a raw body, optionally without a JSON content type
async fn send_raw(app: &Router, uri: &str, body: &str, json_content_type: bool) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if json_content_type {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).expect("error body is JSON");

    (status, value)
}

/// Bodies that cannot be read as a user never reach the store and come back
/// as a 500 with a Message, like any other failed write
#[tokio::test]
async fn test_unreadable_bodies_are_500_with_message() {
    let app = test_app().await;

    let cases = [
        ("{not json", true),
        (r#"{"name":{"first":"A"}}"#, true),
        (r#"{"email":["a@x.com"]}"#, true),
        (r#"{"name":"A","email":"a@x.com","password":"p"}"#, false),
    ];

    for (body, json_content_type) in cases {
        let (status, response) =
            send_raw(&app, "/userRegistration", body, json_content_type).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        assert!(response["Message"].is_string(), "{body}: {response}");
    }

    let (_, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(body, json!([]));
}

/// Numbers and booleans in text fields are stored as their text form
#[tokio::test]
async fn test_scalar_values_are_cast_to_text() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({"name": 42, "email": "a@x.com", "password": true}),
    )
    .await;
    let id = id_of(&created);
    assert_eq!(created["name"], "42");
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["password"], "true");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/update/{id}"),
        Some(json!({"name": "Alice", "email": "a@x.com", "password": 123456})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["password"], "123456");

    let (_, body) = send(&app, Method::GET, &format!("/read/{id}"), None).await;
    assert_eq!(body[0]["name"], "Alice");
    assert_eq!(body[0]["password"], "123456");
}

/// A store whose table was never created fails every operation; the raw
/// driver message is passed through in a 500.
#[tokio::test]
async fn test_storage_failures_are_500_with_message() {
    let store = UserStore::new(connect_data_store("sqlite::memory:").expect("store"));
    let app = user_crud_router(store);

    let requests = [
        (Method::GET, "/".to_string(), None),
        (
            Method::POST,
            "/userRegistration".to_string(),
            Some(json!({"name": "A"})),
        ),
        (Method::GET, "/read/abc".to_string(), None),
        (
            Method::PUT,
            "/update/abc".to_string(),
            Some(json!({"name": "A"})),
        ),
        (Method::DELETE, "/delete/abc".to_string(), None),
    ];

    for (method, uri, body) in requests {
        let (status, response) = send(&app, method.clone(), &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        let message = response["Message"].as_str().expect("Message text");
        assert!(message.contains("no such table"), "{method} {uri}: {message}");
    }
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/userRegistration")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Router is infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
