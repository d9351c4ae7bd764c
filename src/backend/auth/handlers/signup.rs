/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Check that neither the username nor the email is taken
 * 3. Hash password using bcrypt at the configured cost
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and profile
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username, NewUser};
use crate::backend::error::{BackendError, LogError};
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate(request: &SignupRequest) -> Result<(), BackendError> {
    if !is_valid_username(&request.username) {
        return Err(BackendError::bad_request(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    if request.full_name.trim().is_empty() {
        return Err(BackendError::bad_request("Full name is required"));
    }
    if !request.email.contains('@') {
        return Err(BackendError::bad_request("Invalid email format"));
    }
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(BackendError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Map a failed user insert to a response
///
/// A concurrent signup can claim the username or email between the lookups
/// and the insert. The UNIQUE constraint catches that, and it is reported as
/// the same conflict the lookups would have produced.
fn insert_error(err: sqlx::Error) -> BackendError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let message = if db.message().contains("users.email") {
                "Email is already registered"
            } else {
                "Username is already taken"
            };
            return BackendError::conflict(message);
        }
    }
    err.into()
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid username, email, full name or password
/// * `409 Conflict` - Username or email already taken
/// * `500 Internal Server Error` - Hashing, database or token failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    validate(&request).log_err("signup")?;

    if get_user_by_username(&state.pool, &request.username)
        .await
        .log_err("signup")?
        .is_some()
    {
        return Err(BackendError::conflict("Username is already taken")).log_err("signup");
    }

    if get_user_by_email(&state.pool, &request.email)
        .await
        .log_err("signup")?
        .is_some()
    {
        return Err(BackendError::conflict("Email is already registered")).log_err("signup");
    }

    let password_hash = hash(&request.password, state.config.bcrypt_cost).log_err("signup")?;

    let user = create_user(
        &state.pool,
        NewUser {
            username: request.username,
            full_name: request.full_name.trim().to_string(),
            email: request.email,
            password_hash,
        },
    )
    .await
    .map_err(insert_error)
    .log_err("signup")?;

    let token = create_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.token_ttl_days,
    )
    .log_err("signup")?;

    tracing::info!("User created successfully: {}", user.username);

    let profile = UserProfile {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        email: user.email,
        bio: user.bio,
        link: user.link,
        profile_img: user.profile_img,
        cover_img: user.cover_img,
        followers: Vec::new(),
        following: Vec::new(),
        liked_posts: Vec::new(),
        created_at: user.created_at,
        updated_at: user.updated_at,
    };

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user: profile })))
}
