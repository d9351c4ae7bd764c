//! Profile HTTP Handlers
//!
//! - `GET  /api/users/profile/{username}` - Public profile of a user
//! - `POST /api/users/follow/{id}`        - Follow or unfollow a user

use axum::{
    extract::{Path, State},
    Json,
};

use super::db;
use crate::backend::auth::users::{get_user_by_username, user_exists};
use crate::backend::error::{BackendError, LogError};
use crate::backend::middleware::AuthUser;
use crate::backend::params::parse_id;
use crate::backend::server::state::AppState;
use crate::shared::{MessageResponse, UserProfile};

/// Profile of the user with the given username
pub async fn get_user_profile(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>, BackendError> {
    let user = get_user_by_username(&state.pool, &username)
        .await
        .log_err("get_user_profile")?
        .ok_or_else(|| BackendError::not_found("User not found"))
        .log_err("get_user_profile")?;

    let profile = db::load_profile(&state.pool, user)
        .await
        .log_err("get_user_profile")?;
    Ok(Json(profile))
}

/// Follow or unfollow a user
pub async fn follow_unfollow_user(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let target_id = parse_id(&id, "user").log_err("follow_unfollow_user")?;

    if target_id == auth.user_id {
        return Err(BackendError::bad_request("You can't follow/unfollow yourself"))
            .log_err("follow_unfollow_user");
    }

    if !user_exists(&state.pool, target_id)
        .await
        .log_err("follow_unfollow_user")?
    {
        return Err(BackendError::not_found("User not found")).log_err("follow_unfollow_user");
    }

    let following = db::toggle_follow(&state.pool, auth.user_id, target_id)
        .await
        .log_err("follow_unfollow_user")?;

    if following {
        tracing::info!("{} followed {}", auth.username, target_id);
        Ok(Json(MessageResponse::new("User followed successfully")))
    } else {
        tracing::info!("{} unfollowed {}", auth.username, target_id);
        Ok(Json(MessageResponse::new("User unfollowed successfully")))
    }
}
