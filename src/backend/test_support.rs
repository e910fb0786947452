//! Fixtures shared by the unit tests of the backend modules.

use sqlx::SqlitePool;

use crate::backend::auth::users::create_account;
use crate::backend::db;
use crate::backend::posts::db::create_post;
use crate::backend::server::config::{ServerConfig, MIN_BCRYPT_COST};
use crate::shared::{PostRecord, SessionUser};

/// Fresh in-memory database with the schema applied
pub async fn memory_pool() -> SqlitePool {
    let config = ServerConfig::builder()
        .database_url("sqlite::memory:")
        .bcrypt_cost(MIN_BCRYPT_COST)
        .build()
        .expect("valid test config");
    db::connect(&config).await.expect("in-memory database")
}

/// Insert an account named `username` with email `<username>@example.com`.
/// The stored password hash is a placeholder and cannot be logged into.
pub async fn seed_user(pool: &SqlitePool, username: &str) -> SessionUser {
    create_account(pool, username, &format!("{}@example.com", username), "not-a-hash")
        .await
        .expect("seed user")
        .session_user()
}

pub async fn seed_post(pool: &SqlitePool, author: &SessionUser, content: &str) -> PostRecord {
    create_post(pool, author.id, content, None)
        .await
        .expect("seed post")
}
