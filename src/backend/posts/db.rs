//! Database operations for posts
//!
//! Posts, their comments and their likes live in three tables. Reads return
//! raw rows; `populate` turns them into `PostView`s.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::backend::notifications::db::insert_notification;
use crate::backend::sql::push_id_list;
use crate::shared::NotificationKind;

/// A row of the `posts` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: Option<String>,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the `comments` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A row of the `post_likes` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LikeRow {
    pub post_id: Uuid,
    pub user_id: Uuid,
}

/// Outcome of a like toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    /// Whether the post is liked by the user after the toggle
    pub liked: bool,
    /// Ids of the users liking the post, in like order
    pub likes: Vec<Uuid>,
}

/// Create a new post
pub async fn create_post(
    pool: &SqlitePool,
    user_id: Uuid,
    text: Option<String>,
    img: Option<String>,
) -> Result<PostRow, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, text, img, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&text)
    .bind(&img)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(PostRow {
        id,
        user_id,
        text,
        img,
        created_at: now,
        updated_at: now,
    })
}

/// Get a post by ID
pub async fn get_post_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        "SELECT id, user_id, text, img, created_at, updated_at FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post; comments and likes go with it
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Append a comment to a post
pub async fn add_comment(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
    text: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO comments (id, post_id, user_id, text, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE posts SET updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(id)
}

/// Like the post if the user does not like it yet, otherwise unlike it
///
/// A new like also leaves a `like` notification for `author_id`. Both
/// writes and the read of the resulting like list share one transaction.
pub async fn toggle_like(
    pool: &SqlitePool,
    post_id: Uuid,
    author_id: Uuid,
    user_id: Uuid,
) -> Result<LikeToggle, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        let now = Utc::now();
        sqlx::query("INSERT INTO post_likes (post_id, user_id, created_at) VALUES (?, ?, ?)")
            .bind(post_id)
            .bind(user_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE posts SET updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        insert_notification(&mut *tx, user_id, author_id, NotificationKind::Like).await?;
    }

    let likes: Vec<Uuid> = sqlx::query_scalar(
        "SELECT user_id FROM post_likes WHERE post_id = ? ORDER BY created_at, rowid",
    )
    .bind(post_id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(LikeToggle {
        liked: !removed,
        likes,
    })
}

/// All posts, newest first
pub async fn get_all_posts(pool: &SqlitePool) -> Result<Vec<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, user_id, text, img, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Posts written by one user, newest first
pub async fn get_posts_by_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, user_id, text, img, created_at, updated_at
        FROM posts
        WHERE user_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Posts whose author `follower_id` follows, newest first
pub async fn get_following_posts(
    pool: &SqlitePool,
    follower_id: Uuid,
) -> Result<Vec<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.user_id, p.text, p.img, p.created_at, p.updated_at
        FROM posts p
        JOIN follows f ON f.following_id = p.user_id
        WHERE f.follower_id = ?
        ORDER BY p.created_at DESC, p.rowid DESC
        "#,
    )
    .bind(follower_id)
    .fetch_all(pool)
    .await
}

/// Posts liked by a user, newest post first
pub async fn get_liked_posts(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.user_id, p.text, p.img, p.created_at, p.updated_at
        FROM posts p
        JOIN post_likes l ON l.post_id = p.id
        WHERE l.user_id = ?
        ORDER BY p.created_at DESC, p.rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Comments on a batch of posts, oldest first
pub async fn get_comments_for_posts(
    pool: &SqlitePool,
    post_ids: &[Uuid],
) -> Result<Vec<CommentRow>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, post_id, user_id, text, created_at FROM comments WHERE post_id IN ",
    );
    push_id_list(&mut builder, post_ids);
    builder.push(" ORDER BY created_at, rowid");

    builder.build_query_as::<CommentRow>().fetch_all(pool).await
}

/// Likes on a batch of posts, in like order
pub async fn get_likes_for_posts(
    pool: &SqlitePool,
    post_ids: &[Uuid],
) -> Result<Vec<LikeRow>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder =
        QueryBuilder::<Sqlite>::new("SELECT post_id, user_id FROM post_likes WHERE post_id IN ");
    push_id_list(&mut builder, post_ids);
    builder.push(" ORDER BY created_at, rowid");

    builder.build_query_as::<LikeRow>().fetch_all(pool).await
}
