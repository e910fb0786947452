/**
 * Router Configuration
 *
 * Combines the public and protected route tables into one Axum router.
 *
 * # Layers
 *
 * 1. Auth middleware, on protected routes only (`route_layer`)
 * 2. Request tracing (`tower_http::trace`)
 * 3. Permissive CORS, since the browser client is served from another origin
 *
 * Unknown paths get a JSON 404.
 */

use axum::{http::StatusCode, middleware, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Liveness text served at `/`
pub const LIVENESS_TEXT: &str = "Social Media App Backend is running!";

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "msg": "Not found" })))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = configure_protected_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.clone(), auth_middleware),
    );

    let public = configure_public_routes(Router::new()).route("/", get(liveness));

    public
        .merge(protected)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
