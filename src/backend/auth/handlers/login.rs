/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown users and wrong passwords get the same 401 response
 * - Passwords are never logged or returned in responses
 */
use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};
use crate::backend::error::{BackendError, LogError};
use crate::backend::profiles::db::load_profile;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let user = if request.username.contains('@') {
        get_user_by_email(&state.pool, &request.username).await
    } else {
        get_user_by_username(&state.pool, &request.username).await
    };

    let user = user
        .log_err("login")?
        .ok_or_else(|| BackendError::unauthorized(INVALID_CREDENTIALS))
        .log_err("login")?;

    let valid = verify(&request.password, &user.password_hash).log_err("login")?;
    if !valid {
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS)).log_err("login");
    }

    let token = create_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.token_ttl_days,
    )
    .log_err("login")?;

    let profile = load_profile(&state.pool, user).await.log_err("login")?;
    tracing::info!("User logged in successfully: {}", profile.username);

    Ok(Json(AuthResponse {
        token,
        user: profile,
    }))
}
