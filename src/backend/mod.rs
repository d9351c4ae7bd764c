//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP API over a SQLite
//! database, with images kept on an external image host.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Router assembly
//! - **`middleware`** - Bearer token authentication
//! - **`auth`** - Signup, login, JWT sessions, the `users` table
//! - **`posts`** - Posts, comments, likes and the feeds
//! - **`profiles`** - Profiles and follows
//! - **`notifications`** - Like and follow notifications
//! - **`nav`** - Navigation sidebar endpoint
//! - **`media`** - Image store (Cloudinary, in-memory, disabled)
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs            - Module exports and documentation
//! ├── main.rs           - Server binary
//! ├── server/           - Config, state and initialization
//! ├── routes/           - Route configuration
//! ├── middleware/       - Request middleware
//! ├── auth/             - Authentication
//! ├── posts/            - Posts
//! ├── profiles/         - Profiles and follows
//! ├── notifications/    - Notifications
//! ├── media/            - Image store
//! ├── error/            - Error types
//! ├── nav.rs            - Sidebar handler
//! ├── params.rs         - Path parameter parsing
//! └── sql.rs            - Query building helpers
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the connection pool, the image
//! store and the configuration. All persistent state lives in the database.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts, comments and likes
pub mod posts;

/// Profiles and follows
pub mod profiles;

/// Like and follow notifications
pub mod notifications;

/// Navigation sidebar
pub mod nav;

/// Image hosting
pub mod media;

/// Path parameter parsing
pub mod params;

/// Query building helpers
pub mod sql;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
