/**
 * Post HTTP Handlers
 *
 * # Routes
 *
 * - `POST   /api/posts`                  - Create a post
 * - `DELETE /api/posts/{id}`             - Delete one of your posts
 * - `POST   /api/posts/{id}/comment`     - Comment on a post
 * - `POST   /api/posts/{id}/like`        - Like or unlike a post
 * - `GET    /api/posts`                  - Every post
 * - `GET    /api/posts/liked/{id}`       - Posts a user likes
 * - `GET    /api/posts/following`        - Posts by users you follow
 * - `GET    /api/posts/user/{username}`  - Posts by one user
 *
 * All routes sit behind the auth middleware.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db::{self, PostRow};
use super::populate::{populate_post, populate_posts};
use crate::backend::auth::users::{get_user_by_id, get_user_by_username, user_exists};
use crate::backend::error::{BackendError, LogError};
use crate::backend::media::public_id_from_url;
use crate::backend::middleware::AuthUser;
use crate::backend::params::parse_id;
use crate::backend::server::state::AppState;
use crate::shared::{CommentRequest, CreatePostRequest, MessageResponse, PostView};

async fn find_post(state: &AppState, post_id: Uuid, operation: &str) -> Result<PostRow, BackendError> {
    db::get_post_by_id(&state.pool, post_id)
        .await
        .log_err(operation)?
        .ok_or_else(|| BackendError::not_found("Post not found"))
        .log_err(operation)
}

async fn populated(state: &AppState, row: PostRow, operation: &str) -> Result<PostView, BackendError> {
    populate_post(&state.pool, row)
        .await
        .log_err(operation)?
        .ok_or_else(|| BackendError::not_found("Post author not found"))
        .log_err(operation)
}

/// Remove a hosted image, logging instead of failing
async fn discard_image(state: &AppState, public_id: &str) {
    if let Err(e) = state.images.destroy(public_id).await {
        tracing::warn!("Failed to remove image {}: {}", public_id, e);
    }
}

/// Create a post
///
/// An image in the request is uploaded first; the post stores the URL the
/// image store hands back. If the post cannot be saved the upload is
/// removed again.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostView>), BackendError> {
    if !user_exists(&state.pool, auth.user_id).await.log_err("create_post")? {
        return Err(BackendError::not_found("User not found")).log_err("create_post");
    }

    let (text, img) = request.into_parts().log_err("create_post")?;

    let uploaded = match img {
        Some(image) => {
            let uploaded = state.images.upload(&image).await.log_err("create_post")?;
            tracing::debug!("Uploaded post image {}", uploaded.public_id);
            Some(uploaded)
        }
        None => None,
    };

    let img = uploaded.as_ref().map(|image| image.secure_url.clone());
    let row = match db::create_post(&state.pool, auth.user_id, text, img).await {
        Ok(row) => row,
        Err(e) => {
            if let Some(image) = &uploaded {
                discard_image(&state, &image.public_id).await;
            }
            return Err(e).log_err("create_post");
        }
    };
    tracing::info!("Post {} created by {}", row.id, auth.username);

    let post = populated(&state, row, "create_post").await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Delete a post
///
/// Only the author may delete. Removing the hosted image is best effort: a
/// failure is logged and the post is deleted anyway.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post_id = parse_id(&id, "post").log_err("delete_post")?;
    let post = find_post(&state, post_id, "delete_post").await?;

    if post.user_id != auth.user_id {
        return Err(BackendError::unauthorized(
            "You are not authorized to delete this post",
        ))
        .log_err("delete_post");
    }

    if let Some(public_id) = post.img.as_deref().and_then(public_id_from_url) {
        discard_image(&state, public_id).await;
    }

    db::delete_post(&state.pool, post.id)
        .await
        .log_err("delete_post")?;
    tracing::info!("Post {} deleted by {}", post.id, auth.username);

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// Comment on a post and return the updated post
pub async fn comment_on_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<PostView>, BackendError> {
    let post_id = parse_id(&id, "post").log_err("comment_on_post")?;
    let text = request.into_text().log_err("comment_on_post")?;
    let post = find_post(&state, post_id, "comment_on_post").await?;

    db::add_comment(&state.pool, post.id, auth.user_id, &text)
        .await
        .log_err("comment_on_post")?;

    let updated = find_post(&state, post.id, "comment_on_post").await?;
    let post = populated(&state, updated, "comment_on_post").await?;
    Ok(Json(post))
}

/// Like or unlike a post
///
/// Returns the ids of the users liking the post after the toggle.
pub async fn like_unlike_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Uuid>>, BackendError> {
    let post_id = parse_id(&id, "post").log_err("like_unlike_post")?;
    let post = find_post(&state, post_id, "like_unlike_post").await?;

    let toggle = db::toggle_like(&state.pool, post.id, post.user_id, auth.user_id)
        .await
        .log_err("like_unlike_post")?;

    tracing::info!(
        "{} {} post {}",
        auth.username,
        if toggle.liked { "liked" } else { "unliked" },
        post.id
    );
    Ok(Json(toggle.likes))
}

/// Every post, newest first
pub async fn get_all_posts(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
) -> Result<Json<Vec<PostView>>, BackendError> {
    let rows = db::get_all_posts(&state.pool).await.log_err("get_all_posts")?;
    let posts = populate_posts(&state.pool, rows)
        .await
        .log_err("get_all_posts")?;
    Ok(Json(posts))
}

/// Posts liked by the user in the path
pub async fn get_liked_posts(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<PostView>>, BackendError> {
    let user_id = parse_id(&id, "user").log_err("get_liked_posts")?;
    if !user_exists(&state.pool, user_id).await.log_err("get_liked_posts")? {
        return Err(BackendError::not_found("User not found")).log_err("get_liked_posts");
    }

    let rows = db::get_liked_posts(&state.pool, user_id)
        .await
        .log_err("get_liked_posts")?;
    let posts = populate_posts(&state.pool, rows)
        .await
        .log_err("get_liked_posts")?;
    Ok(Json(posts))
}

/// Posts by the users the requester follows
pub async fn get_following_posts(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<PostView>>, BackendError> {
    let user = get_user_by_id(&state.pool, auth.user_id)
        .await
        .log_err("get_following_posts")?
        .ok_or_else(|| BackendError::not_found("User not found"))
        .log_err("get_following_posts")?;

    let rows = db::get_following_posts(&state.pool, user.id)
        .await
        .log_err("get_following_posts")?;
    let posts = populate_posts(&state.pool, rows)
        .await
        .log_err("get_following_posts")?;
    Ok(Json(posts))
}

/// Posts written by the user with the given username
pub async fn get_user_posts(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<Vec<PostView>>, BackendError> {
    let user = get_user_by_username(&state.pool, &username)
        .await
        .log_err("get_user_posts")?
        .ok_or_else(|| BackendError::not_found("User not found"))
        .log_err("get_user_posts")?;

    let rows = db::get_posts_by_user(&state.pool, user.id)
        .await
        .log_err("get_user_posts")?;
    let posts = populate_posts(&state.pool, rows)
        .await
        .log_err("get_user_posts")?;
    Ok(Json(posts))
}
