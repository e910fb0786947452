//! Common test utilities and helpers
//!
//! Every test gets its own server over a private in-memory database, so
//! tests never share rows and can run in parallel.

#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use socialmedia::backend::server::{create_app, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("valid test config")
}

pub async fn test_server() -> TestServer {
    let app = create_app(&test_config()).await.expect("app should start");
    TestServer::new(app).expect("test server")
}

/// A registered user and their session token
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub id: i64,
    pub username: String,
    pub token: String,
}

pub fn token_header() -> HeaderName {
    HeaderName::from_static("x-auth-token")
}

pub fn token_value(token: &str) -> HeaderValue {
    HeaderValue::from_str(token).expect("token is a valid header value")
}

/// Register `username` with email `<username>@example.com` and password `password123`
pub async fn register(server: &TestServer, username: &str) -> TestAccount {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "password123"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "register {}", username);

    let body: Value = response.json();
    TestAccount {
        id: body["user"]["id"].as_i64().expect("user id"),
        username: body["user"]["username"].as_str().expect("username").to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}

/// Create a post as `account` and return its id
pub async fn create_post(server: &TestServer, account: &TestAccount, content: &str) -> i64 {
    let response = server
        .post("/api/posts")
        .add_header(token_header(), token_value(&account.token))
        .json(&json!({ "content": content }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["post"]["id"].as_i64().expect("post id")
}

/// `msg` field of an error or acknowledgement body
pub fn msg(body: &Value) -> &str {
    body["msg"].as_str().unwrap_or_default()
}
