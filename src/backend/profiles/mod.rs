//! Profiles Module
//!
//! Full user profiles (with follower, following and liked-post lists) and
//! the follow toggle.

pub mod db;
pub mod handlers;

pub use handlers::{follow_unfollow_user, get_user_profile};
