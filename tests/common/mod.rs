//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - In-memory database fixtures
//! - An in-process app driven with `tower::ServiceExt::oneshot`
//! - Authentication helpers
//! - Custom assertion macros
//!
//! Each test binary uses a different subset.
#![allow(dead_code, unused_imports)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use auth_helpers::*;
pub use database::*;
