//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite database.
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route tables and router assembly
//! - **`db`** - Connection pool and schema
//! - **`auth`** - Registration, login, password hashing, session tokens
//! - **`posts`** - Posts and likes
//! - **`comments`** - Comments on posts
//! - **`users`** - Profiles and the follow graph
//! - **`middleware`** - Session token check for protected routes
//! - **`extract`** - Body, query and path extractors with JSON rejections
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── db/             - Pool and schema
//! ├── auth/           - Authentication
//! ├── posts/          - Post service
//! ├── comments/       - Comment service
//! ├── users/          - User and follow service
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Handling
//!
//! Every operation is a single SQL statement, or a read followed by a
//! conditional write for owner-only mutations. Failures are returned as
//! `BackendError`, which renders as `{"msg": "..."}` with the matching
//! status code; storage failures become a generic 500.
//!
//! # Example
//!
//! ```rust,no_run
//! use socialmedia::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Database pool and schema
pub mod db;

/// Backend error types
pub mod error;

/// Authentication and user accounts
pub mod auth;

/// Posts and likes
pub mod posts;

/// Comments on posts
pub mod comments;

/// Profiles and follows
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{BackendError, BackendResult};
pub use server::{create_app, AppState, ServerConfig};
