//! Database test fixtures
//!
//! Every test gets its own in-memory SQLite database with the migrations
//! applied. The pool holds a single connection that never expires, since an
//! in-memory database lives only as long as its connection.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use social_net::backend::server::init::run_migrations;

/// Create a migrated in-memory database
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Number of rows in `table`
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Remove a user row directly, bypassing the API
pub async fn delete_user_row(pool: &SqlitePool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to delete user");
}
