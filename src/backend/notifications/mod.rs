//! Notifications Module
//!
//! Likes and follows leave a notification for the user on the receiving end.
//! This module stores them and serves the recipient's list.

pub mod db;
pub mod handlers;

pub use handlers::{delete_notifications, get_notifications};
