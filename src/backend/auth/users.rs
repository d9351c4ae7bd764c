/**
 * User Model and Database Operations
 *
 * This module handles the `users` table. Relations hanging off a user
 * (follows, likes) live with the modules that own them.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::backend::sql::push_id_list;
use crate::shared::UserSummary;

const USER_COLUMNS: &str = "id, username, full_name, email, password_hash, bio, link, \
                            profile_img, cover_img, created_at, updated_at";

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Display name
    pub full_name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub bio: Option<String>,
    pub link: Option<String>,
    pub profile_img: Option<String>,
    pub cover_img: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The compact public view of this user
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            profile_img: self.profile_img.clone(),
        }
    }
}

/// Fields required to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Create a new user
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, full_name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&new_user.username)
    .bind(&new_user.full_name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        username: new_user.username,
        full_name: new_user.full_name,
        email: new_user.email,
        password_hash: new_user.password_hash,
        bio: None,
        link: None,
        profile_img: None,
        cover_img: None,
        created_at: now,
        updated_at: now,
    })
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS))
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Check that a user row exists
pub async fn user_exists(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: Uuid,
    username: String,
    full_name: String,
    profile_img: Option<String>,
}

/// Resolve a batch of user ids into summaries with a single query
///
/// Ids that do not exist are simply absent from the map.
pub async fn get_user_summaries(
    pool: &SqlitePool,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, UserSummary>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, username, full_name, profile_img FROM users WHERE id IN ",
    );
    push_id_list(&mut builder, ids);

    let rows = builder
        .build_query_as::<SummaryRow>()
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.id,
                UserSummary {
                    id: row.id,
                    username: row.username,
                    full_name: row.full_name,
                    profile_img: row.profile_img,
                },
            )
        })
        .collect())
}
