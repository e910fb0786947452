//! Shared Module
//!
//! Types that describe the JSON API: request payloads, the records returned
//! by each endpoint, and payload validation errors. Nothing in here touches
//! the database or the HTTP stack, so a client can depend on it as-is.

/// Shared error types
pub mod error;

/// Users, posts, comments and the requests that create them
pub mod social;

pub use error::SharedError;
pub use social::{
    AuthResponse, CommentRecord, CommentRequest, CommentResponse, CommentView, CreatePostRequest,
    LoginRequest, MessageResponse, PostRecord, PostResponse, PostView, RegisterRequest,
    SessionUser, UpdatePostRequest, UserProfile, UserSummary,
};
