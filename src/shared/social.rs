//! Social API types
//!
//! Request payloads are deserialized with every field optional so that a
//! missing field surfaces as a [`SharedError`] with the API's own message
//! instead of a generic JSON rejection. Response records mirror the SQL
//! projections that produce them and derive `sqlx::FromRow` when the
//! `server` feature is on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{non_blank, SharedError};

/// Public identity carried inside session tokens and auth responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

/// Full public profile of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Minimal projection used by follower / following listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub profile_picture: Option<String>,
}

/// A post row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct PostRecord {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A post joined with its author and live like count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct PostView {
    pub id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub username: String,
    pub profile_picture: Option<String>,
    pub likes_count: i64,
}

/// A comment row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub username: String,
    pub profile_picture: Option<String>,
}

/// Register request
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl RegisterRequest {
    /// Check that every field is present and non-blank.
    pub fn validate(&self) -> Result<NewAccount<'_>, SharedError> {
        let username = non_blank(self.username.as_deref());
        let email = non_blank(self.email.as_deref());
        let password = non_blank(self.password.as_deref());

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) => Ok(NewAccount {
                username: username.trim(),
                email: email.trim(),
                password,
            }),
            _ => {
                let missing = [("username", username), ("email", email), ("password", password)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field);
                Err(SharedError::missing(missing))
            }
        }
    }
}

/// Login request
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)` once both are present.
    pub fn validate(&self) -> Result<(&str, &str), SharedError> {
        let email = non_blank(self.email.as_deref());
        let password = non_blank(self.password.as_deref());

        match (email, password) {
            (Some(email), Some(password)) => Ok((email.trim(), password)),
            _ => {
                let missing = [("email", email), ("password", password)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field);
                Err(SharedError::missing(missing))
            }
        }
    }
}

/// Auth response returned by register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Create post request. The image field is `imageUrl` on the wire.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(&str, Option<&str>), SharedError> {
        let content = non_blank(self.content.as_deref())
            .ok_or_else(|| SharedError::validation("content", "Post content is required"))?;
        Ok((content, non_blank(self.image_url.as_deref())))
    }
}

/// Partial post update; omitted or blank fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

impl UpdatePostRequest {
    pub fn content(&self) -> Option<&str> {
        non_blank(self.content.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }
}

/// Body of comment create and update
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<&str, SharedError> {
        non_blank(self.content.as_deref())
            .ok_or_else(|| SharedError::validation("content", "Comment content is required"))
    }
}

/// Plain acknowledgement body, `{"msg": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Returned by post create and update
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub msg: String,
    pub post: PostRecord,
}

/// Returned by comment create and update
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    pub msg: String,
    pub comment: CommentRecord,
}
