//! Password hashing
//!
//! bcrypt with a configurable work factor. The salt is generated per hash
//! and stored inside the hash string. Handlers go through the `_blocking`
//! variants, which run the bcrypt rounds on tokio's blocking pool.

use crate::backend::error::BackendResult;

/// bcrypt hasher carrying the configured cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Check `password` against a stored hash. A malformed hash counts as
    /// a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {:?}", e);
                false
            }
        }
    }

    pub async fn hash_blocking(&self, password: &str) -> BackendResult<String> {
        let hasher = *self;
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        Ok(hash)
    }

    pub async fn verify_blocking(&self, password: &str, hash: &str) -> BackendResult<bool> {
        let hasher = *self;
        let (password, hash) = (password.to_owned(), hash.to_owned());
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await?;
        Ok(valid)
    }
}
