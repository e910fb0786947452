//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Session token check for protected routes

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AUTH_TOKEN_HEADER};
