//! Shared Module
//!
//! This module contains the request and response types exchanged between
//! the browser client and the API server. Everything here is plain data:
//! serializable with serde, free of database or HTTP dependencies, and
//! usable from both sides of the wire.
//!
//! # Overview
//!
//! - **`user`** - Public user views (summaries embedded in posts, full profiles)
//! - **`post`** - Posts, comments and the create/comment request bodies
//! - **`notification`** - Like and follow notifications
//! - **`nav`** - The navigation sidebar model
//! - **`error`** - Validation errors

/// User views
pub mod user;

/// Posts and comments
pub mod post;

/// Notifications
pub mod notification;

/// Navigation sidebar model
pub mod nav;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use nav::{NavAccount, NavAction, NavLink, Sidebar};
pub use notification::{Notification, NotificationKind};
pub use post::{CommentRequest, CommentView, CreatePostRequest, MessageResponse, PostView};
pub use user::{UserProfile, UserSummary};
