//! Posts Module
//!
//! Posts with optional text and image, their comments and their likes.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Queries over posts, comments and post_likes
//! ├── populate.rs  - Row to PostView resolution
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod populate;

pub use handlers::{
    comment_on_post, create_post, delete_post, get_all_posts, get_following_posts,
    get_liked_posts, get_user_posts, like_unlike_post,
};
