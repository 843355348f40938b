//! Notification derivation for investment lifecycle events.
//!
//! Every status an investment can land in maps to exactly one notification
//! type and one recipient. The mapping is total over the status enum, so a
//! new status cannot be added without deciding who hears about it.

use crate::models::{Investment, InvestmentStatus, NewNotification, NotificationType};

/// Party that receives a lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAudience {
    /// The startup being invested in (`startup_id`).
    Startup,
    /// The investor profile (`profile_id`).
    Investor,
}

/// Notification type and audience for an investment status.
pub fn notification_for_status(
    status: InvestmentStatus,
) -> (NotificationType, NotificationAudience) {
    match status {
        InvestmentStatus::NeedsAction => (
            NotificationType::InvestmentCreated,
            NotificationAudience::Startup,
        ),
        InvestmentStatus::Pending => (
            NotificationType::InvestmentAccepted,
            NotificationAudience::Investor,
        ),
        InvestmentStatus::Confirmed => (
            NotificationType::InvestmentConfirmed,
            NotificationAudience::Startup,
        ),
        InvestmentStatus::Declined => (
            NotificationType::InvestmentDeclined,
            NotificationAudience::Investor,
        ),
        InvestmentStatus::Withdrawn => (
            NotificationType::InvestmentWithdrawn,
            NotificationAudience::Startup,
        ),
        InvestmentStatus::Inactive => (
            NotificationType::InvestmentInactive,
            NotificationAudience::Investor,
        ),
    }
}

/// Derives the notification record for an investment's current status.
///
/// Pure function: no side effects, identical output for identical input.
pub fn derive_notification(investment: &Investment) -> NewNotification {
    let (notification_type, audience) = notification_for_status(investment.status);
    let recipient_id = match audience {
        NotificationAudience::Startup => investment.startup_id,
        NotificationAudience::Investor => investment.profile_id,
    };
    NewNotification {
        recipient_id,
        notification_type,
        investment_id: investment.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn investment(status: InvestmentStatus) -> Investment {
        Investment {
            id: Uuid::new_v4(),
            fund_pool_id: Uuid::new_v4(),
            startup_id: Uuid::new_v4(),
            profile_id: Uuid::new_v4(),
            amount: 1000,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_derivation_table() {
        let cases = [
            (
                InvestmentStatus::NeedsAction,
                NotificationType::InvestmentCreated,
                NotificationAudience::Startup,
            ),
            (
                InvestmentStatus::Pending,
                NotificationType::InvestmentAccepted,
                NotificationAudience::Investor,
            ),
            (
                InvestmentStatus::Confirmed,
                NotificationType::InvestmentConfirmed,
                NotificationAudience::Startup,
            ),
            (
                InvestmentStatus::Declined,
                NotificationType::InvestmentDeclined,
                NotificationAudience::Investor,
            ),
            (
                InvestmentStatus::Withdrawn,
                NotificationType::InvestmentWithdrawn,
                NotificationAudience::Startup,
            ),
            (
                InvestmentStatus::Inactive,
                NotificationType::InvestmentInactive,
                NotificationAudience::Investor,
            ),
        ];

        for (status, expected_type, expected_audience) in cases {
            let (notification_type, audience) = notification_for_status(status);
            assert_eq!(notification_type, expected_type, "type for {status}");
            assert_eq!(audience, expected_audience, "audience for {status}");
        }
    }

    #[test]
    fn test_derive_recipient_startup() {
        let inv = investment(InvestmentStatus::NeedsAction);
        let derived = derive_notification(&inv);
        assert_eq!(derived.recipient_id, inv.startup_id);
        assert_eq!(
            derived.notification_type,
            NotificationType::InvestmentCreated
        );
        assert_eq!(derived.investment_id, inv.id);
    }

    #[test]
    fn test_derive_recipient_investor() {
        let inv = investment(InvestmentStatus::Declined);
        let derived = derive_notification(&inv);
        assert_eq!(derived.recipient_id, inv.profile_id);
        assert_eq!(
            derived.notification_type,
            NotificationType::InvestmentDeclined
        );
    }

    #[test]
    fn test_derivation_is_pure() {
        let inv = investment(InvestmentStatus::Confirmed);
        let first = derive_notification(&inv);
        let second = derive_notification(&inv);
        assert_eq!(first.recipient_id, second.recipient_id);
        assert_eq!(first.notification_type, second.notification_type);
        assert_eq!(first.investment_id, second.investment_id);
    }
}
