/**
 * Authentication Middleware
 *
 * Protects routes that require a session. The token is read from the
 * `x-auth-token` header, or from `Authorization: Bearer <token>` when that
 * header is absent, verified, and the identity it carries is attached to
 * the request extensions for the `AuthUser` extractor.
 *
 * Verification is stateless: a token stays valid until it expires even if
 * its account has been deleted.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::SessionUser;

/// Header the client sends the session token in
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Find the session token in the request headers
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(AUTH_TOKEN_HEADER) {
        return value.to_str().ok().map(str::trim).filter(|t| !t.is_empty());
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Authentication middleware
///
/// Returns 401 with "No token, authorization denied" when no token is sent
/// and "Token is not valid" when it fails verification.
pub async fn auth_middleware(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing auth token on {}", request.uri().path());
        BackendError::MissingToken
    })?;

    let claims = keys.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::InvalidToken
    })?;

    request.extensions_mut().insert(claims.user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only meaningful on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    /// Fail with `Forbidden(message)` unless the caller is `owner_id`
    pub fn ensure_owns(&self, owner_id: i64, message: &str) -> BackendResult<()> {
        if self.0.id == owner_id {
            Ok(())
        } else {
            tracing::warn!("User {} denied access to entity owned by {}", self.0.id, owner_id);
            Err(BackendError::forbidden(message))
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<SessionUser>().cloned().ok_or_else(|| {
            tracing::warn!("SessionUser not found in request extensions");
            BackendError::MissingToken
        })?;
        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn keys() -> SessionKeys {
        SessionKeys::new("test-secret", 3600)
    }

    fn alice() -> SessionUser {
        SessionUser {
            id: 7,
            username: "alice".to_string(),
        }
    }

    async fn whoami(AuthUser(user): AuthUser) -> String {
        user.username
    }

    fn app() -> Router {
        Router::new()
            .route("/private", get(whoami))
            .route_layer(middleware::from_fn_with_state(keys(), auth_middleware))
            .with_state(keys())
    }

    async fn call(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_extract_token_prefers_custom_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, "abc".parse().unwrap());
        headers.insert(AUTHORIZATION, "Bearer xyz".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn test_extract_token_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer xyz".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("xyz"));

        let mut basic = HeaderMap::new();
        basic.insert(AUTHORIZATION, "Basic xyz".parse().unwrap());
        assert_eq!(extract_token(&basic), None);
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = keys().create_token(&alice()).unwrap();
        let request = Request::builder()
            .uri("/private")
            .header(AUTH_TOKEN_HEADER, token)
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let request = Request::builder().uri("/private").body(Body::empty()).unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("No token, authorization denied"));
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let request = Request::builder()
            .uri("/private")
            .header(AUTH_TOKEN_HEADER, "garbage")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Token is not valid"));
    }

    #[test]
    fn test_ensure_owns() {
        let caller = AuthUser(alice());
        assert!(caller.ensure_owns(7, "nope").is_ok());
        let err = caller.ensure_owns(8, "nope").unwrap_err();
        assert!(matches!(err, BackendError::Forbidden(_)));
    }
}
