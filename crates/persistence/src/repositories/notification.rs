//! Notification repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{NotificationEntity, NotificationTypeDb};
use crate::metrics::QueryTimer;

/// Repository for notification-related database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Creates a new NotificationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a new notification. Notifications start unseen.
    pub async fn create(
        &self,
        recipient_id: Uuid,
        notification_type: NotificationTypeDb,
        investment_id: Uuid,
    ) -> Result<NotificationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_notification");
        let result = sqlx::query_as::<_, NotificationEntity>(
            r#"
            INSERT INTO notifications (recipient_id, notification_type, investment_id)
            VALUES ($1, $2, $3)
            RETURNING id, recipient_id, notification_type, investment_id, seen, created_at
            "#,
        )
        .bind(recipient_id)
        .bind(notification_type)
        .bind(investment_id)
        .fetch_one(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// List notifications for a recipient, newest first.
    pub async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
        unseen_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NotificationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_notifications_for_recipient");
        let result = if unseen_only {
            sqlx::query_as::<_, NotificationEntity>(
                r#"
                SELECT id, recipient_id, notification_type, investment_id, seen, created_at
                FROM notifications
                WHERE recipient_id = $1 AND seen = FALSE
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(recipient_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, NotificationEntity>(
                r#"
                SELECT id, recipient_id, notification_type, investment_id, seen, created_at
                FROM notifications
                WHERE recipient_id = $1
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(recipient_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        };
        timer.observe();
        result
    }

    /// Count notifications for a recipient.
    pub async fn count_for_recipient(
        &self,
        recipient_id: Uuid,
        unseen_only: bool,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_notifications_for_recipient");
        let result = if unseen_only {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM notifications
                WHERE recipient_id = $1 AND seen = FALSE
                "#,
            )
            .bind(recipient_id)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM notifications
                WHERE recipient_id = $1
                "#,
            )
            .bind(recipient_id)
            .fetch_one(&self.pool)
            .await
        };
        timer.observe();
        result
    }

    /// Mark a notification as seen. Returns None when the row is missing.
    pub async fn mark_seen(&self, id: Uuid) -> Result<Option<NotificationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("mark_notification_seen");
        let result = sqlx::query_as::<_, NotificationEntity>(
            r#"
            UPDATE notifications
            SET seen = TRUE
            WHERE id = $1
            RETURNING id, recipient_id, notification_type, investment_id, seen, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe();
        result
    }
}
