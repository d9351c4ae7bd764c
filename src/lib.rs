//! Social Net - Main Library
//!
//! Backend for a small social network: users post text and images, comment
//! on and like each other's posts, follow one another, and get notified when
//! that happens.
//!
//! # Module Structure
//!
//! - **`shared`** - Request and response types used on both sides of the wire
//!   - Posts, comments, user views, notifications
//!   - Navigation sidebar model
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP API
//!   - SQLite persistence through sqlx
//!   - JWT authentication
//!   - Image hosting through Cloudinary
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use social_net::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
