/**
 * User Profile and Follow Graph Queries
 *
 * A follow edge is directed: `follower_id` follows `following_id`. Each
 * ordered pair exists at most once and a user never follows themselves.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::{is_foreign_key_violation, is_unique_violation, BackendError, BackendResult};
use crate::shared::{UserProfile, UserSummary};

/// Public profile of a user
pub async fn get_profile(pool: &SqlitePool, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        "SELECT id, username, email, profile_picture, bio, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Create the edge `follower_id -> following_id`
pub async fn follow(pool: &SqlitePool, follower_id: i64, following_id: i64) -> BackendResult<()> {
    if follower_id == following_id {
        return Err(BackendError::SelfFollowNotAllowed);
    }

    let result = sqlx::query(
        "INSERT INTO followers (follower_id, following_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(follower_id)
    .bind(following_id)
    .bind(Utc::now())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(BackendError::AlreadyFollowing),
        Err(e) if is_foreign_key_violation(&e) => Err(BackendError::not_found("User not found")),
        Err(e) => Err(e.into()),
    }
}

/// Remove the edge. Returns whether it existed.
pub async fn unfollow(pool: &SqlitePool, follower_id: i64, following_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM followers WHERE follower_id = ? AND following_id = ?")
        .bind(follower_id)
        .bind(following_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Users following `user_id`, in the order they followed
pub async fn list_followers(pool: &SqlitePool, user_id: i64) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT u.id, u.username, u.profile_picture
        FROM followers f
        JOIN users u ON f.follower_id = u.id
        WHERE f.following_id = ?
        ORDER BY f.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Users `user_id` follows, in the order they were followed
pub async fn list_following(pool: &SqlitePool, user_id: i64) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT u.id, u.username, u.profile_picture
        FROM followers f
        JOIN users u ON f.following_id = u.id
        WHERE f.follower_id = ?
        ORDER BY f.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
