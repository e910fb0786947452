/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Require username, email and password
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Store the account and issue a session token
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::{create_account, email_exists};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::ApiJson;
use crate::shared::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400` - A field is missing, or the email or username is taken
/// * `500` - Hashing, storage or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "email": "alice@example.com", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "user": {"id": 1, "username": "alice"}}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(keys): State<SessionKeys>,
    State(hasher): State<PasswordHasher>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let account = request.validate()?;
    tracing::info!("Register request for: {}", account.email);

    if email_exists(&pool, account.email).await? {
        tracing::warn!("Email already registered: {}", account.email);
        return Err(BackendError::conflict("User with that email already exists"));
    }

    let password_hash = hasher.hash_blocking(account.password).await?;
    let created = create_account(&pool, account.username, account.email, &password_hash).await?;

    let user = created.session_user();
    let token = keys.create_token(&user)?;

    tracing::info!("User registered: {} (id {})", user.username, user.id);
    Ok(Json(AuthResponse { token, user }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::MIN_BCRYPT_COST;
    use crate::backend::test_support::memory_pool;

    fn keys() -> SessionKeys {
        SessionKeys::new("test-secret", 3600)
    }

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let pool = memory_pool().await;
        let keys = keys();
        let result = register(
            State(pool.clone()),
            State(keys.clone()),
            State(PasswordHasher::new(MIN_BCRYPT_COST)),
            ApiJson(request("alice", "alice@example.com", "password123")),
        )
        .await
        .unwrap();

        assert_eq!(result.user.username, "alice");
        let claims = keys.verify_token(&result.token).unwrap();
        assert_eq!(claims.user, result.user);

        let stored: (String,) = sqlx::query_as("SELECT password FROM users WHERE id = ?")
            .bind(result.user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_ne!(stored.0, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let pool = memory_pool().await;
        let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
        register(
            State(pool.clone()),
            State(keys()),
            State(hasher),
            ApiJson(request("alice", "alice@example.com", "pw")),
        )
        .await
        .unwrap();

        let err = register(
            State(pool.clone()),
            State(keys()),
            State(hasher),
            ApiJson(request("alice2", "alice@example.com", "pw")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message(), "User with that email already exists");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let pool = memory_pool().await;
        let err = register(
            State(pool),
            State(keys()),
            State(PasswordHasher::new(MIN_BCRYPT_COST)),
            ApiJson(RegisterRequest {
                username: Some("alice".to_string()),
                email: None,
                password: Some("pw".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message(), "Please enter all fields");
    }
}
