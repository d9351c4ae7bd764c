//! Notification HTTP Handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use super::db;
use crate::backend::auth::users::get_user_summaries;
use crate::backend::error::{BackendError, LogError};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::sql::unique_ids;
use crate::shared::{MessageResponse, Notification, NotificationKind};

/// GET /api/notifications
///
/// Returns the requester's notifications newest first, then marks the
/// returned ones read. The response shows the read state from before this
/// call.
pub async fn get_notifications(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<Notification>>, BackendError> {
    let rows = db::get_notifications_for_user(&state.pool, auth.user_id)
        .await
        .log_err("get_notifications")?;

    let unread: Vec<Uuid> = rows.iter().filter(|row| !row.read).map(|row| row.id).collect();

    let senders = get_user_summaries(
        &state.pool,
        &unique_ids(rows.iter().map(|row| row.from_user_id)),
    )
    .await
    .log_err("get_notifications")?;

    let notifications = rows
        .into_iter()
        .filter_map(|row| {
            let Some(kind) = NotificationKind::from_str(&row.kind) else {
                tracing::warn!("Skipping notification {} with unknown kind {:?}", row.id, row.kind);
                return None;
            };
            let from = senders.get(&row.from_user_id)?.clone();
            Some(Notification {
                id: row.id,
                from,
                to: row.to_user_id,
                kind,
                read: row.read,
                created_at: row.created_at,
            })
        })
        .collect();

    db::mark_read(&state.pool, auth.user_id, &unread)
        .await
        .log_err("get_notifications")?;

    Ok(Json(notifications))
}

/// DELETE /api/notifications
pub async fn delete_notifications(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let deleted = db::delete_notifications_for_user(&state.pool, auth.user_id)
        .await
        .log_err("delete_notifications")?;

    tracing::info!("Deleted {} notifications for {}", deleted, auth.username);
    Ok(Json(MessageResponse::new("Notifications deleted successfully")))
}
