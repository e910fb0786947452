//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Request and response
//! bodies live in `shared::social`.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - Account creation
//! - **`login`** - POST /api/auth/login - Credential check
//! - **`get_me`** - GET /api/auth/me - Profile of the token holder
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Unknown email and wrong password return the same error
//! - The password hash never leaves `auth::users`

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
