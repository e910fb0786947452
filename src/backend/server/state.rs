/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. The
 * `FromRef` implementations let handlers extract only the piece they use
 * (`State<SqlitePool>`, `State<SessionKeys>`, `State<PasswordHasher>`)
 * instead of the whole struct.
 *
 * Every field is cheap to clone: the pool is reference-counted and the key
 * material is small.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Shared state of the HTTP server
#[derive(Clone, Debug)]
pub struct AppState {
    /// Connection pool shared by every handler
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub session_keys: SessionKeys,

    /// bcrypt hasher with the configured cost
    pub password_hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            session_keys: SessionKeys::new(&config.jwt_secret, config.token_ttl_secs),
            password_hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.password_hasher
    }
}
