//! Socialmedia - Main Library
//!
//! A small social-networking backend: users register and log in, publish
//! text/image posts, like and unlike posts, follow other users and comment
//! on posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types for the JSON API and payload validation.
//!   These carry no server dependencies and can be reused by a client.
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum router, auth middleware and handlers
//!   - SQLite persistence through sqlx
//!   - JWT session issuance and bcrypt password hashing
//!
//! # Feature Flags
//!
//! - **`server`** (default) - enables the `backend` module and the
//!   `socialmedia-server` binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use socialmedia::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for rejected request payloads
//! - `backend::error::BackendError` for everything a handler can fail with;
//!   it renders as `{"msg": "..."}` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
