//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token authentication for protected routes, plus the
//!   `AuthUser` and `OptionalAuthUser` extractors handlers use to read the
//!   result

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser, OptionalAuthUser};
