//! Post population
//!
//! Resolves post rows into `PostView`s: author and commenters become user
//! summaries, and likes and comments are attached. Each batch costs three
//! queries regardless of how many posts it holds.

use std::collections::HashMap;

use sqlx::SqlitePool;
use uuid::Uuid;

use super::db::{self, PostRow};
use crate::backend::auth::users::get_user_summaries;
use crate::backend::sql::unique_ids;
use crate::shared::{CommentView, PostView};

/// Populate a batch of posts, keeping the order of `rows`
pub async fn populate_posts(
    pool: &SqlitePool,
    rows: Vec<PostRow>,
) -> Result<Vec<PostView>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let post_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let comments = db::get_comments_for_posts(pool, &post_ids).await?;
    let likes = db::get_likes_for_posts(pool, &post_ids).await?;

    let user_ids = unique_ids(
        rows.iter()
            .map(|row| row.user_id)
            .chain(comments.iter().map(|comment| comment.user_id)),
    );
    let users = get_user_summaries(pool, &user_ids).await?;

    let mut likes_by_post: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for like in likes {
        likes_by_post.entry(like.post_id).or_default().push(like.user_id);
    }

    let mut comments_by_post: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
    for comment in comments {
        let Some(user) = users.get(&comment.user_id) else {
            continue;
        };
        comments_by_post
            .entry(comment.post_id)
            .or_default()
            .push(CommentView {
                id: comment.id,
                text: comment.text,
                user: user.clone(),
                created_at: comment.created_at,
            });
    }

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let user = users.get(&row.user_id)?.clone();
            Some(PostView {
                id: row.id,
                user,
                text: row.text,
                img: row.img,
                likes: likes_by_post.remove(&row.id).unwrap_or_default(),
                comments: comments_by_post.remove(&row.id).unwrap_or_default(),
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
        })
        .collect())
}

/// Populate a single post
pub async fn populate_post(pool: &SqlitePool, row: PostRow) -> Result<Option<PostView>, sqlx::Error> {
    Ok(populate_posts(pool, vec![row]).await?.into_iter().next())
}
