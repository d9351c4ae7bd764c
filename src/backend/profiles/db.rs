//! Database operations for profiles and follows

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::notifications::db::insert_notification;
use crate::shared::{NotificationKind, UserProfile};

/// Ids of the users following `user_id`, oldest follow first
pub async fn get_followers(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT follower_id FROM follows WHERE following_id = ? ORDER BY created_at, rowid",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Ids of the users `user_id` follows, oldest follow first
pub async fn get_following(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT following_id FROM follows WHERE follower_id = ? ORDER BY created_at, rowid",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Ids of the posts `user_id` likes, most recent like first
pub async fn get_liked_post_ids(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT post_id FROM post_likes WHERE user_id = ? ORDER BY created_at DESC, rowid DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Build the full profile of a user
pub async fn load_profile(pool: &SqlitePool, user: User) -> Result<UserProfile, sqlx::Error> {
    let followers = get_followers(pool, user.id).await?;
    let following = get_following(pool, user.id).await?;
    let liked_posts = get_liked_post_ids(pool, user.id).await?;

    Ok(UserProfile {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        email: user.email,
        bio: user.bio,
        link: user.link,
        profile_img: user.profile_img,
        cover_img: user.cover_img,
        followers,
        following,
        liked_posts,
        created_at: user.created_at,
        updated_at: user.updated_at,
    })
}

/// Follow `target_id` if `follower_id` does not follow them yet, otherwise
/// unfollow
///
/// A new follow leaves a `follow` notification for the target. Returns
/// whether `follower_id` follows the target afterwards.
pub async fn toggle_follow(
    pool: &SqlitePool,
    follower_id: Uuid,
    target_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM follows WHERE follower_id = ? AND following_id = ?")
        .bind(follower_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        sqlx::query("INSERT INTO follows (follower_id, following_id, created_at) VALUES (?, ?, ?)")
            .bind(follower_id)
            .bind(target_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        insert_notification(&mut *tx, follower_id, target_id, NotificationKind::Follow).await?;
    }

    tx.commit().await?;
    Ok(!removed)
}
