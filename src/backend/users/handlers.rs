/**
 * User HTTP Handlers
 *
 * # Endpoints
 *
 * - `GET    /api/users/{id}` - Public profile
 * - `GET    /api/users/{id}/followers` - Who follows the user
 * - `GET    /api/users/{id}/following` - Whom the user follows
 * - `POST   /api/users/follow/{id}` - Follow (auth)
 * - `DELETE /api/users/unfollow/{id}` - Unfollow (auth)
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::EntityId;
use crate::backend::middleware::AuthUser;
use crate::backend::users::db;
use crate::shared::{MessageResponse, UserProfile, UserSummary};

pub async fn get_user(
    State(pool): State<SqlitePool>,
    EntityId(user_id): EntityId,
) -> BackendResult<Json<UserProfile>> {
    let profile = db::get_profile(&pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(Json(profile))
}

/// Follower list. An unknown user has no followers.
pub async fn list_followers(
    State(pool): State<SqlitePool>,
    EntityId(user_id): EntityId,
) -> BackendResult<Json<Vec<UserSummary>>> {
    Ok(Json(db::list_followers(&pool, user_id).await?))
}

pub async fn list_following(
    State(pool): State<SqlitePool>,
    EntityId(user_id): EntityId,
) -> BackendResult<Json<Vec<UserSummary>>> {
    Ok(Json(db::list_following(&pool, user_id).await?))
}

pub async fn follow_user(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(target_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    db::follow(&pool, user.id(), target_id).await?;
    tracing::info!("User {} followed {}", user.id(), target_id);
    Ok(Json(MessageResponse::new("User followed successfully")))
}

pub async fn unfollow_user(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(target_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    if !db::unfollow(&pool, user.id(), target_id).await? {
        return Err(BackendError::NotFollowing);
    }
    tracing::info!("User {} unfollowed {}", user.id(), target_id);
    Ok(Json(MessageResponse::new("User unfollowed successfully")))
}
