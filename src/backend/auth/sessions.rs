/**
 * Session Management and JWT Tokens
 *
 * Tokens are HS256 JWTs carrying the public identity of the user
 * (`{user: {id, username}}`) plus issue and expiry times. Verification is
 * stateless: it needs only the shared secret held by [`SessionKeys`].
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::SessionUser;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the token holder
    pub user: SessionUser,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys plus the token lifetime
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, user: &SessionUser) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_at(user, now_secs())
    }

    /// Create a token as if it had been issued at `iat`
    pub fn create_token_at(
        &self,
        user: &SessionUser,
        iat: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user: user.clone(),
            exp: iat.saturating_add(self.ttl_secs),
            iat,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}
