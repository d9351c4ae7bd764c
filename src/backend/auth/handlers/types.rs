/**
 * Authentication Handler Types
 *
 * Request and response types used by the signup, login and me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::UserProfile;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// User's chosen username (3-30 chars, starts with a letter, alphanumeric + underscore)
    pub username: String,
    /// Display name
    pub full_name: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
///
/// `username` may also hold the account's email address.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. Contains the JWT token and the user's
/// profile for immediate use by the client.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for the `Authorization: Bearer` header
    pub token: String,
    pub user: UserProfile,
}
