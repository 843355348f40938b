//! Postgres-backed implementation of the investment store.

use domain::models::{
    FundPool, Investment, InvestmentStatus, NewInvestment, NewNotification, Notification,
};
use domain::services::{InvestmentStore, StoreError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::{FundPoolRepository, InvestmentRepository, NotificationRepository};

/// Unique violation error code in Postgres.
const UNIQUE_VIOLATION: &str = "23505";

/// [`InvestmentStore`] backed by Postgres repositories.
#[derive(Clone)]
pub struct PgInvestmentStore {
    investments: InvestmentRepository,
    fund_pools: FundPoolRepository,
    notifications: NotificationRepository,
}

impl PgInvestmentStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            investments: InvestmentRepository::new(pool.clone()),
            fund_pools: FundPoolRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait::async_trait]
impl InvestmentStore for PgInvestmentStore {
    async fn insert_investment(&self, new: NewInvestment) -> Result<Investment, StoreError> {
        self.investments
            .create(new.fund_pool_id, new.startup_id, new.profile_id, new.amount)
            .await
            .map(Investment::from)
            .map_err(|err| {
                // The partial unique index on active investments backs the
                // single-active-investment rule.
                if is_unique_violation(&err) {
                    StoreError::DuplicateActive
                } else {
                    backend(err)
                }
            })
    }

    async fn investment_by_id(&self, id: Uuid) -> Result<Option<Investment>, StoreError> {
        self.investments
            .find_by_id(id)
            .await
            .map(|row| row.map(Investment::from))
            .map_err(backend)
    }

    async fn update_investment_status(
        &self,
        id: Uuid,
        from: InvestmentStatus,
        to: InvestmentStatus,
    ) -> Result<Option<Investment>, StoreError> {
        self.investments
            .transition(id, from.into(), to.into())
            .await
            .map(|row| row.map(Investment::from))
            .map_err(backend)
    }

    async fn fund_pool_by_id(&self, id: Uuid) -> Result<Option<FundPool>, StoreError> {
        self.fund_pools
            .find_by_id(id)
            .await
            .map(|row| row.map(FundPool::from))
            .map_err(backend)
    }

    async fn has_active_investment(
        &self,
        profile_id: Uuid,
        fund_pool_id: Uuid,
    ) -> Result<bool, StoreError> {
        self.investments
            .exists_active(profile_id, fund_pool_id)
            .await
            .map_err(backend)
    }

    async fn sum_confirmed(&self, fund_pool_id: Uuid) -> Result<i64, StoreError> {
        self.investments
            .sum_confirmed(fund_pool_id)
            .await
            .map_err(backend)
    }

    async fn raise_fund_goal(&self, fund_pool_id: Uuid, target: i64) -> Result<bool, StoreError> {
        self.fund_pools
            .raise_goal(fund_pool_id, target)
            .await
            .map_err(backend)
    }

    async fn insert_notification(&self, new: NewNotification) -> Result<Notification, StoreError> {
        self.notifications
            .create(new.recipient_id, new.notification_type.into(), new.investment_id)
            .await
            .map(Notification::from)
            .map_err(backend)
    }
}
