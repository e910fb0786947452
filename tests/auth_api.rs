//! Authentication API integration tests
//!
//! Registration, login, the `me` endpoint and token handling on protected
//! routes.

mod common;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{msg, register, test_server, token_header, token_value, TEST_SECRET};
use socialmedia::backend::auth::SessionKeys;
use socialmedia::shared::SessionUser;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let server = test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_field() {
    let server = test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(msg(&response.json()), "Please enter all fields");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = test_server().await;
    register(&server, "alice").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(msg(&response.json()), "User with that email already exists");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = test_server().await;
    register(&server, "alice").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(msg(&response.json()), "Username already taken");
}

#[tokio::test]
async fn test_login_success() {
    let server = test_server().await;
    let alice = register(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["id"].as_i64(), Some(alice.id));
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let server = test_server().await;
    register(&server, "alice").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "nope" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);
    let wrong_body: Value = wrong_password.json();
    let unknown_body: Value = unknown_email.json();
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(msg(&wrong_body), "Invalid Credentials");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = test_server().await;

    let response = server
        .post("/api/auth/login")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body.get("msg").is_some());
}

#[tokio::test]
async fn test_me_returns_profile() {
    let server = test_server().await;
    let alice = register(&server, "alice").await;

    let response = server
        .get("/api/auth/me")
        .add_header(token_header(), token_value(&alice.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"].as_i64(), Some(alice.id));
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let server = test_server().await;
    let alice = register(&server, "alice").await;

    let response = server
        .get("/api/auth/me")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", alice.token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token() {
    let server = test_server().await;

    let response = server
        .post("/api/posts")
        .json(&json!({ "content": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&response.json()), "No token, authorization denied");
}

#[tokio::test]
async fn test_invalid_token() {
    let server = test_server().await;

    let response = server
        .get("/api/auth/me")
        .add_header(token_header(), token_value("not.a.token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&response.json()), "Token is not valid");
}

#[tokio::test]
async fn test_expired_token() {
    let server = test_server().await;
    let alice = register(&server, "alice").await;

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let expired = SessionKeys::new(TEST_SECRET, 3600)
        .create_token_at(
            &SessionUser {
                id: alice.id,
                username: alice.username.clone(),
            },
            now - 2 * 3600,
        )
        .unwrap();

    let response = server
        .get("/api/auth/me")
        .add_header(token_header(), token_value(&expired))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&response.json()), "Token is not valid");
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let server = test_server().await;
    let forged = SessionKeys::new("some-other-secret", 3600)
        .create_token(&SessionUser {
            id: 1,
            username: "mallory".to_string(),
        })
        .unwrap();

    let response = server
        .get("/api/auth/me")
        .add_header(token_header(), token_value(&forged))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_liveness_and_unknown_route() {
    let server = test_server().await;

    let root = server.get("/").await;
    assert_eq!(root.status_code(), StatusCode::OK);
    assert_eq!(root.text(), "Social Media App Backend is running!");

    let missing = server.get("/api/nothing-here").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(msg(&missing.json()), "Not found");
}
