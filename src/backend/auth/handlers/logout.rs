//! Logout handler for POST /api/auth/logout.
//!
//! Tokens are not stored server-side, so there is nothing to revoke; the
//! endpoint exists so the client has a single place to signal logout.

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::MessageResponse;

pub async fn logout(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::info!("User logged out: {}", user.username);
    Json(MessageResponse::new("Logged out successfully"))
}
