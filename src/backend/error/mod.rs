//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and its
//! conversion into JSON error responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Every handler failure ends up as `{"error": message, "status": code}`.
//! Precondition failures carry their own 4xx code. Anything thrown by a
//! collaborator (database, image store, hashing, signing) becomes a 500 with
//! the underlying message, after being logged with the name of the operation
//! that failed.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, LogError};
