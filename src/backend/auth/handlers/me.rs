/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the profile of the user the auth middleware
 * identified from the bearer token.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, LogError};
use crate::backend::middleware::AuthUser;
use crate::backend::profiles::db::load_profile;
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token (from the middleware)
/// * `404 Not Found` - The user was deleted after the token was checked
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserProfile>, BackendError> {
    let user = get_user_by_id(&state.pool, auth.user_id)
        .await
        .log_err("get_me")?
        .ok_or_else(|| BackendError::not_found("User not found"))
        .log_err("get_me")?;

    let profile = load_profile(&state.pool, user).await.log_err("get_me")?;
    Ok(Json(profile))
}
