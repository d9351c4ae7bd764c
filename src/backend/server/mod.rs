//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Layered configuration (defaults, TOML, environment)
//! └── init.rs         - Database connection, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::load()`
//! 2. **Database**: connect and run the embedded migrations
//! 3. **Image Store**: Cloudinary, in-memory or disabled
//! 4. **Router Creation**: all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ImageStoreConfig, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
