//! Database operations for notifications

use chrono::{DateTime, Utc};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::backend::sql::push_id_list;

use crate::shared::NotificationKind;

/// A row of the `notifications` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NotificationRow {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Record a notification
///
/// Takes any executor so the like toggle can write its notification inside
/// its own transaction.
pub async fn insert_notification<'e, E>(
    executor: E,
    from_user_id: Uuid,
    to_user_id: Uuid,
    kind: NotificationKind,
) -> Result<Uuid, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO notifications (id, from_user_id, to_user_id, kind, read, created_at)
        VALUES (?, ?, ?, ?, 0, ?)
        "#,
    )
    .bind(id)
    .bind(from_user_id)
    .bind(to_user_id)
    .bind(kind.as_str())
    .bind(Utc::now())
    .execute(executor)
    .await?;

    Ok(id)
}

/// Notifications addressed to a user, newest first
pub async fn get_notifications_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<NotificationRow>, sqlx::Error> {
    sqlx::query_as::<_, NotificationRow>(
        r#"
        SELECT id, from_user_id, to_user_id, kind, read, created_at
        FROM notifications
        WHERE to_user_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Mark the given notifications of a user as read
///
/// Only `ids` are touched, so a notification that arrives after the caller
/// read the list stays unread.
pub async fn mark_read(pool: &SqlitePool, user_id: Uuid, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut builder =
        QueryBuilder::<Sqlite>::new("UPDATE notifications SET read = 1 WHERE read = 0 AND to_user_id = ");
    builder.push_bind(user_id);
    builder.push(" AND id IN ");
    push_id_list(&mut builder, ids);

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Delete every notification addressed to a user
pub async fn delete_notifications_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notifications WHERE to_user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
