/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * Runs behind the auth middleware, so the caller's identity is already in
 * the request extensions. Returns the stored profile, which may be gone if
 * the account was deleted after the token was issued.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::users::db::get_profile;
use crate::shared::UserProfile;

pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> BackendResult<Json<UserProfile>> {
    let profile = get_profile(&pool, user.id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    Ok(Json(profile))
}
