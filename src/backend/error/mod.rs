//! Backend Error Module
//!
//! Error types for the HTTP layer and their conversion into responses.
//!
//! - **`types`** - `BackendError` and its status / message mapping
//! - **`conversion`** - `IntoResponse` and sqlx error classification
//!
//! Every error renders as a JSON body `{"msg": "..."}`. Internal failures
//! (storage, hashing, token signing) render as `500` with a fixed message;
//! the underlying error only reaches the logs.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::{is_foreign_key_violation, is_unique_violation};
pub use types::{BackendError, BackendResult};
