//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification type emitted on investment lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    InvestmentCreated,
    InvestmentAccepted,
    InvestmentConfirmed,
    InvestmentDeclined,
    InvestmentWithdrawn,
    InvestmentInactive,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::InvestmentCreated => write!(f, "investment_created"),
            NotificationType::InvestmentAccepted => write!(f, "investment_accepted"),
            NotificationType::InvestmentConfirmed => write!(f, "investment_confirmed"),
            NotificationType::InvestmentDeclined => write!(f, "investment_declined"),
            NotificationType::InvestmentWithdrawn => write!(f, "investment_withdrawn"),
            NotificationType::InvestmentInactive => write!(f, "investment_inactive"),
        }
    }
}

/// A stored notification for later display to its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Investment that triggered this notification.
    pub investment_id: Uuid,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new notification. `seen` starts false.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub notification_type: NotificationType,
    pub investment_id: Uuid,
}

/// Query parameters for the notification feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListNotificationsQuery {
    pub recipient_id: Uuid,
    #[serde(default)]
    pub unseen_only: bool,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    shared::pagination::DEFAULT_PER_PAGE
}

/// Response for the notification feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListNotificationsResponse {
    pub data: Vec<Notification>,
    pub pagination: shared::pagination::Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_display() {
        assert_eq!(
            NotificationType::InvestmentCreated.to_string(),
            "investment_created"
        );
        assert_eq!(
            NotificationType::InvestmentAccepted.to_string(),
            "investment_accepted"
        );
        assert_eq!(
            NotificationType::InvestmentConfirmed.to_string(),
            "investment_confirmed"
        );
        assert_eq!(
            NotificationType::InvestmentDeclined.to_string(),
            "investment_declined"
        );
        assert_eq!(
            NotificationType::InvestmentWithdrawn.to_string(),
            "investment_withdrawn"
        );
        assert_eq!(
            NotificationType::InvestmentInactive.to_string(),
            "investment_inactive"
        );
    }

    #[test]
    fn test_notification_serializes_type_field() {
        let notification = Notification {
            id: Uuid::nil(),
            recipient_id: Uuid::nil(),
            notification_type: NotificationType::InvestmentConfirmed,
            investment_id: Uuid::nil(),
            seen: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains(r#""type":"investment_confirmed""#));
        assert!(json.contains(r#""seen":false"#));
    }

    #[test]
    fn test_list_query_defaults() {
        let json = r#"{"recipient_id":"44444444-4444-4444-4444-444444444444"}"#;
        let query: ListNotificationsQuery = serde_json::from_str(json).unwrap();
        assert!(!query.unseen_only);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
    }
}
