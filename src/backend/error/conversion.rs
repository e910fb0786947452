/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, plus helpers that classify constraint
 * violations reported by SQLite so call sites can turn them into domain
 * errors instead of server errors.
 *
 * # Response Format
 *
 * ```json
 * { "msg": "Post not found" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status.as_u16(), self);
        }

        (status, Json(json!({ "msg": self.message() }))).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        BackendError::validation("query", rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameter: {}", rejection.body_text());
        BackendError::validation("id", "Invalid id")
    }
}

/// True when a statement failed on a UNIQUE constraint
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// True when a statement referenced a row that does not exist
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
