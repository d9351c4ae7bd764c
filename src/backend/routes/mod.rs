//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, static files and fallback
//! - **`api_routes`** - JSON API endpoints, split into public and authenticated
//!
//! # Example
//!
//! ```rust,ignore
//! use social_net::backend::routes::create_router;
//!
//! let app = create_router(app_state);
//! axum::serve(listener, app).await?;
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
