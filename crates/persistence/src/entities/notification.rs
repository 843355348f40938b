//! Notification entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Notification, NotificationType};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationTypeDb {
    InvestmentCreated,
    InvestmentAccepted,
    InvestmentConfirmed,
    InvestmentDeclined,
    InvestmentWithdrawn,
    InvestmentInactive,
}

impl From<NotificationType> for NotificationTypeDb {
    fn from(kind: NotificationType) -> Self {
        match kind {
            NotificationType::InvestmentCreated => NotificationTypeDb::InvestmentCreated,
            NotificationType::InvestmentAccepted => NotificationTypeDb::InvestmentAccepted,
            NotificationType::InvestmentConfirmed => NotificationTypeDb::InvestmentConfirmed,
            NotificationType::InvestmentDeclined => NotificationTypeDb::InvestmentDeclined,
            NotificationType::InvestmentWithdrawn => NotificationTypeDb::InvestmentWithdrawn,
            NotificationType::InvestmentInactive => NotificationTypeDb::InvestmentInactive,
        }
    }
}

impl From<NotificationTypeDb> for NotificationType {
    fn from(kind: NotificationTypeDb) -> Self {
        match kind {
            NotificationTypeDb::InvestmentCreated => NotificationType::InvestmentCreated,
            NotificationTypeDb::InvestmentAccepted => NotificationType::InvestmentAccepted,
            NotificationTypeDb::InvestmentConfirmed => NotificationType::InvestmentConfirmed,
            NotificationTypeDb::InvestmentDeclined => NotificationType::InvestmentDeclined,
            NotificationTypeDb::InvestmentWithdrawn => NotificationType::InvestmentWithdrawn,
            NotificationTypeDb::InvestmentInactive => NotificationType::InvestmentInactive,
        }
    }
}

/// Database row mapping for the notifications table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub notification_type: NotificationTypeDb,
    pub investment_id: Uuid,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            notification_type: entity.notification_type.into(),
            investment_id: entity.investment_id,
            seen: entity.seen,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_entity_to_domain() {
        let entity = NotificationEntity {
            id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            notification_type: NotificationTypeDb::InvestmentConfirmed,
            investment_id: Uuid::new_v4(),
            seen: false,
            created_at: Utc::now(),
        };

        let notification: Notification = entity.clone().into();
        assert_eq!(notification.id, entity.id);
        assert_eq!(
            notification.notification_type,
            NotificationType::InvestmentConfirmed
        );
        assert!(!notification.seen);
    }

    #[test]
    fn test_type_conversion_round_trip() {
        let kinds = [
            NotificationType::InvestmentCreated,
            NotificationType::InvestmentAccepted,
            NotificationType::InvestmentConfirmed,
            NotificationType::InvestmentDeclined,
            NotificationType::InvestmentWithdrawn,
            NotificationType::InvestmentInactive,
        ];
        for kind in kinds {
            let db: NotificationTypeDb = kind.into();
            let back: NotificationType = db.into();
            assert_eq!(back, kind);
        }
    }
}
