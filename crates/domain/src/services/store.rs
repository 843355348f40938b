//! Persistence seam for the investment lifecycle.
//!
//! The lifecycle service talks to storage only through [`InvestmentStore`],
//! so the same logic runs against Postgres in production and against
//! [`InMemoryStore`] in tests.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{
    FundPool, Investment, InvestmentStatus, NewInvestment, NewNotification, Notification,
};

/// Error produced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the single-active-investment uniqueness rule.
    #[error("an active investment already exists for this investor and pool")]
    DuplicateActive,
    /// Any other backend failure.
    #[error("store operation failed: {0}")]
    Backend(String),
}

/// Storage operations required by the investment lifecycle.
#[async_trait::async_trait]
pub trait InvestmentStore: Send + Sync {
    /// Inserts a new investment with status `needs_action`.
    async fn insert_investment(&self, new: NewInvestment) -> Result<Investment, StoreError>;

    /// Fetches an investment by id.
    async fn investment_by_id(&self, id: Uuid) -> Result<Option<Investment>, StoreError>;

    /// Compare-and-set status update.
    ///
    /// Returns `None` when the row is missing or its status is no longer
    /// `from` (a concurrent writer won).
    async fn update_investment_status(
        &self,
        id: Uuid,
        from: InvestmentStatus,
        to: InvestmentStatus,
    ) -> Result<Option<Investment>, StoreError>;

    /// Fetches a fund pool by id.
    async fn fund_pool_by_id(&self, id: Uuid) -> Result<Option<FundPool>, StoreError>;

    /// True when the investor already holds a non-terminal investment on the pool.
    async fn has_active_investment(
        &self,
        profile_id: Uuid,
        fund_pool_id: Uuid,
    ) -> Result<bool, StoreError>;

    /// Sum of amounts across confirmed investments on the pool.
    async fn sum_confirmed(&self, fund_pool_id: Uuid) -> Result<i64, StoreError>;

    /// Raises the pool goal to `target` if it is below; never lowers it.
    ///
    /// Returns whether the pool row existed.
    async fn raise_fund_goal(&self, fund_pool_id: Uuid, target: i64) -> Result<bool, StoreError>;

    /// Inserts a notification record with `seen = false`.
    async fn insert_notification(&self, new: NewNotification) -> Result<Notification, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    investments: HashMap<Uuid, Investment>,
    pools: HashMap<Uuid, FundPool>,
    notifications: Vec<Notification>,
}

/// In-memory store for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
    /// When set, confirmed-total reads and goal updates fail.
    fail_reconciliation: bool,
    /// When set, notification inserts fail.
    fail_notification_writes: bool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose goal-reconciliation operations fail.
    pub fn failing_reconciliation() -> Self {
        Self {
            fail_reconciliation: true,
            ..Self::default()
        }
    }

    /// Creates a store whose notification inserts fail.
    pub fn failing_notifications() -> Self {
        Self {
            fail_notification_writes: true,
            ..Self::default()
        }
    }

    /// Adds a fund pool directly, bypassing any creation flow.
    pub async fn seed_pool(&self, pool: FundPool) {
        let mut state = self.state.lock().await;
        state.pools.insert(pool.id, pool);
    }

    /// Snapshot of all stored notifications, in insertion order.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.lock().await.notifications.clone()
    }
}

#[async_trait::async_trait]
impl InvestmentStore for InMemoryStore {
    async fn insert_investment(&self, new: NewInvestment) -> Result<Investment, StoreError> {
        let mut state = self.state.lock().await;
        let duplicate = state.investments.values().any(|inv| {
            inv.profile_id == new.profile_id
                && inv.fund_pool_id == new.fund_pool_id
                && inv.status.is_active()
        });
        if duplicate {
            return Err(StoreError::DuplicateActive);
        }

        let now = Utc::now();
        let investment = Investment {
            id: Uuid::new_v4(),
            fund_pool_id: new.fund_pool_id,
            startup_id: new.startup_id,
            profile_id: new.profile_id,
            amount: new.amount,
            status: InvestmentStatus::NeedsAction,
            created_at: now,
            updated_at: now,
        };
        state.investments.insert(investment.id, investment.clone());
        Ok(investment)
    }

    async fn investment_by_id(&self, id: Uuid) -> Result<Option<Investment>, StoreError> {
        Ok(self.state.lock().await.investments.get(&id).cloned())
    }

    async fn update_investment_status(
        &self,
        id: Uuid,
        from: InvestmentStatus,
        to: InvestmentStatus,
    ) -> Result<Option<Investment>, StoreError> {
        let mut state = self.state.lock().await;
        match state.investments.get_mut(&id) {
            Some(investment) if investment.status == from => {
                investment.status = to;
                investment.updated_at = Utc::now();
                Ok(Some(investment.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn fund_pool_by_id(&self, id: Uuid) -> Result<Option<FundPool>, StoreError> {
        Ok(self.state.lock().await.pools.get(&id).cloned())
    }

    async fn has_active_investment(
        &self,
        profile_id: Uuid,
        fund_pool_id: Uuid,
    ) -> Result<bool, StoreError> {
        let state = self.state.lock().await;
        Ok(state.investments.values().any(|inv| {
            inv.profile_id == profile_id
                && inv.fund_pool_id == fund_pool_id
                && inv.status.is_active()
        }))
    }

    async fn sum_confirmed(&self, fund_pool_id: Uuid) -> Result<i64, StoreError> {
        if self.fail_reconciliation {
            return Err(StoreError::Backend("simulated read failure".to_string()));
        }
        let state = self.state.lock().await;
        Ok(state
            .investments
            .values()
            .filter(|inv| {
                inv.fund_pool_id == fund_pool_id && inv.status == InvestmentStatus::Confirmed
            })
            .map(|inv| inv.amount)
            .sum())
    }

    async fn raise_fund_goal(&self, fund_pool_id: Uuid, target: i64) -> Result<bool, StoreError> {
        if self.fail_reconciliation {
            return Err(StoreError::Backend("simulated update failure".to_string()));
        }
        let mut state = self.state.lock().await;
        match state.pools.get_mut(&fund_pool_id) {
            Some(pool) => {
                pool.fund_goal = pool.fund_goal.max(target);
                pool.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_notification(&self, new: NewNotification) -> Result<Notification, StoreError> {
        if self.fail_notification_writes {
            return Err(StoreError::Backend("simulated write failure".to_string()));
        }
        let mut state = self.state.lock().await;
        let notification = Notification {
            id: Uuid::new_v4(),
            recipient_id: new.recipient_id,
            notification_type: new.notification_type,
            investment_id: new.investment_id,
            seen: false,
            created_at: Utc::now(),
        };
        state.notifications.push(notification.clone());
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FundPoolStatus;

    fn pool(goal: i64) -> FundPool {
        FundPool {
            id: Uuid::new_v4(),
            startup_id: Uuid::new_v4(),
            fund_goal: goal,
            status: FundPoolStatus::Open,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_investment(pool: &FundPool, amount: i64) -> NewInvestment {
        NewInvestment {
            fund_pool_id: pool.id,
            startup_id: pool.startup_id,
            profile_id: Uuid::new_v4(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_insert_starts_in_needs_action() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;

        let investment = store
            .insert_investment(new_investment(&pool, 1000))
            .await
            .unwrap();
        assert_eq!(investment.status, InvestmentStatus::NeedsAction);
        assert_eq!(investment.amount, 1000);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_active() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;

        let new = new_investment(&pool, 1000);
        store.insert_investment(new.clone()).await.unwrap();

        let result = store.insert_investment(new).await;
        assert!(matches!(result, Err(StoreError::DuplicateActive)));
    }

    #[tokio::test]
    async fn test_insert_allows_new_after_terminal() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;

        let new = new_investment(&pool, 1000);
        let first = store.insert_investment(new.clone()).await.unwrap();
        store
            .update_investment_status(
                first.id,
                InvestmentStatus::NeedsAction,
                InvestmentStatus::Declined,
            )
            .await
            .unwrap()
            .unwrap();

        assert!(store.insert_investment(new).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_status_cas_miss_returns_none() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;
        let investment = store
            .insert_investment(new_investment(&pool, 1000))
            .await
            .unwrap();

        // Wrong expected status
        let result = store
            .update_investment_status(
                investment.id,
                InvestmentStatus::Pending,
                InvestmentStatus::Confirmed,
            )
            .await
            .unwrap();
        assert!(result.is_none());

        // Unknown id
        let result = store
            .update_investment_status(
                Uuid::new_v4(),
                InvestmentStatus::NeedsAction,
                InvestmentStatus::Pending,
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_raise_fund_goal_never_lowers() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;

        assert!(store.raise_fund_goal(pool.id, 3000).await.unwrap());
        let unchanged = store.fund_pool_by_id(pool.id).await.unwrap().unwrap();
        assert_eq!(unchanged.fund_goal, 5000);

        assert!(store.raise_fund_goal(pool.id, 6000).await.unwrap());
        let raised = store.fund_pool_by_id(pool.id).await.unwrap().unwrap();
        assert_eq!(raised.fund_goal, 6000);
    }

    #[tokio::test]
    async fn test_raise_fund_goal_missing_pool() {
        let store = InMemoryStore::new();
        assert!(!store.raise_fund_goal(Uuid::new_v4(), 6000).await.unwrap());
    }

    #[tokio::test]
    async fn test_sum_confirmed_ignores_other_statuses() {
        let store = InMemoryStore::new();
        let pool = pool(5000);
        store.seed_pool(pool.clone()).await;

        let first = store
            .insert_investment(new_investment(&pool, 1000))
            .await
            .unwrap();
        store
            .update_investment_status(
                first.id,
                InvestmentStatus::NeedsAction,
                InvestmentStatus::Pending,
            )
            .await
            .unwrap();
        store
            .update_investment_status(
                first.id,
                InvestmentStatus::Pending,
                InvestmentStatus::Confirmed,
            )
            .await
            .unwrap();

        // Second investment stays needs_action and must not count.
        store
            .insert_investment(new_investment(&pool, 700))
            .await
            .unwrap();

        assert_eq!(store.sum_confirmed(pool.id).await.unwrap(), 1000);
    }

    #[tokio::test]
    async fn test_failing_stores() {
        let store = InMemoryStore::failing_reconciliation();
        assert!(store.sum_confirmed(Uuid::new_v4()).await.is_err());
        assert!(store.raise_fund_goal(Uuid::new_v4(), 1).await.is_err());

        let store = InMemoryStore::failing_notifications();
        let result = store
            .insert_notification(NewNotification {
                recipient_id: Uuid::new_v4(),
                notification_type: crate::models::NotificationType::InvestmentCreated,
                investment_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }
}
