//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration from the environment
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool opened, schema applied
//! 3. **State Creation**: pool, session keys and password hasher
//! 4. **Router Creation**: routes, auth middleware, tracing and CORS layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_state};
pub use state::AppState;
