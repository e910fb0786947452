/**
 * Backend Error Types
 *
 * One enum covers every way a request can fail. Domain failures carry the
 * message that is sent back to the client; infrastructure failures wrap the
 * source error and are reported as a generic server error.
 *
 * # Status Code Mapping
 *
 * - Validation, conflicts, bad credentials and follow/like misuse → 400
 * - Missing or invalid token → 401
 * - Not the owner → 403
 * - Entity absent → 404
 * - sqlx / bcrypt / token signing / blocking tasks → 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Result alias used by handlers and data-access functions
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request payload or path failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// No credential header was sent
    #[error("No token, authorization denied")]
    MissingToken,

    /// The credential failed signature or expiry checks
    #[error("Token is not valid")]
    InvalidToken,

    /// Unknown email or wrong password
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// Authenticated, but not the owner of the entity
    #[error("{0}")]
    Forbidden(String),

    /// Entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// A unique account field (email, username) is already taken
    #[error("{0}")]
    Conflict(String),

    #[error("You have already liked this post")]
    DuplicateLike,

    #[error("You have not liked this post")]
    NotLiked,

    #[error("You cannot follow yourself")]
    SelfFollowNotAllowed,

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("You are not following this user")]
    NotFollowing,

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidCredentials
            | Self::Conflict(_)
            | Self::DuplicateLike
            | Self::NotLiked
            | Self::SelfFollowNotAllowed
            | Self::AlreadyFollowing
            | Self::NotFollowing => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hashing(_) | Self::Token(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error hides an infrastructure failure
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message sent to the client
    pub fn message(&self) -> String {
        if self.is_internal() {
            "Server Error".to_string()
        } else {
            self.to_string()
        }
    }
}
