//! Authentication test helpers
//!
//! Provides utilities for creating test users and generating tokens without
//! going through the signup endpoint.

use sqlx::SqlitePool;
use uuid::Uuid;

use social_net::backend::auth::sessions::create_token;
use social_net::backend::auth::users::{create_user, NewUser};

/// Secret every test app signs its tokens with
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Lowest cost bcrypt accepts, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> TestUser {
    let password_hash =
        bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).expect("Failed to hash password");

    let user = create_user(
        pool,
        NewUser {
            username: username.to_string(),
            full_name: format!("{} Test", username),
            email: format!("{}@example.com", username),
            password_hash,
        },
    )
    .await
    .expect("Failed to create test user");

    let token = generate_test_token(user.id, &user.username);

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}

/// Generate a test JWT token
pub fn generate_test_token(user_id: Uuid, username: &str) -> String {
    create_token(user_id, username, TEST_JWT_SECRET, 1).expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
