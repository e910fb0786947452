/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the database pool and apply the schema
 * 2. Build `AppState` from the pool and configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::db;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Build the application state for `config`
pub async fn create_state(config: &ServerConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = db::connect(config).await?;
    Ok(AppState::new(db_pool, config))
}

/// Build the complete application router for `config`
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing socialmedia backend server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
