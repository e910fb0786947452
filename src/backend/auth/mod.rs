//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account rows (with password hash) and queries
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - POST /api/auth/register
//!     ├── login.rs    - POST /api/auth/login
//!     └── me.rs       - GET  /api/auth/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → account created → token returned
//! 2. **Login**: email, password → hash verified → token returned
//! 3. **Me**: token → profile of the caller
//!
//! Tokens carry `{id, username}` and expire after one hour by default.
//! Unknown emails and wrong passwords produce the same error.

/// Account rows and queries
pub mod users;

/// bcrypt hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionKeys};
