/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password using bcrypt
 * 3. Issue a session token
 *
 * An unknown email and a wrong password produce the same error so the
 * response does not reveal which emails are registered.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::get_account_by_email;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::ApiJson;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400` - A field is missing, or the credentials do not match
/// * `500` - Storage or token signing failed
pub async fn login(
    State(pool): State<SqlitePool>,
    State(keys): State<SessionKeys>,
    State(hasher): State<PasswordHasher>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let (email, password) = request.validate()?;
    tracing::info!("Login request for: {}", email);

    let account = get_account_by_email(&pool, email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::InvalidCredentials
    })?;

    if !hasher.verify_blocking(password, &account.password).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::InvalidCredentials);
    }

    let user = account.session_user();
    let token = keys.create_token(&user)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, email);
    Ok(Json(AuthResponse { token, user }))
}
