/**
 * Account Model and Database Operations
 *
 * Rows of the `users` table including the password hash. This is the only
 * place the hash is read; everything that leaves the server goes through
 * the public projections in `shared::social`.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::{is_unique_violation, BackendError, BackendResult};
use crate::shared::SessionUser;

/// Account row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Create a new account
///
/// A unique-constraint failure is reported as `Conflict`, naming the field
/// that collided.
pub async fn create_account(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> BackendResult<Account> {
    let result = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO users (username, email, password, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, email, password, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(account) => Ok(account),
        Err(e) if is_unique_violation(&e) => {
            if violates_email_unique(&e) {
                Err(BackendError::conflict("User with that email already exists"))
            } else {
                Err(BackendError::conflict("Username already taken"))
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// SQLite names the offending column as `UNIQUE constraint failed: users.email`
fn violates_email_unique(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.message().contains("users.email"))
}

/// Get account by email
pub async fn get_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, username, email, password, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Whether an account with this email exists
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
