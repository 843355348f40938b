//! Investment entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Investment, InvestmentStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for investment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "investment_status", rename_all = "snake_case")]
pub enum InvestmentStatusDb {
    NeedsAction,
    Pending,
    Confirmed,
    Declined,
    Withdrawn,
    Inactive,
}

impl From<InvestmentStatus> for InvestmentStatusDb {
    fn from(status: InvestmentStatus) -> Self {
        match status {
            InvestmentStatus::NeedsAction => InvestmentStatusDb::NeedsAction,
            InvestmentStatus::Pending => InvestmentStatusDb::Pending,
            InvestmentStatus::Confirmed => InvestmentStatusDb::Confirmed,
            InvestmentStatus::Declined => InvestmentStatusDb::Declined,
            InvestmentStatus::Withdrawn => InvestmentStatusDb::Withdrawn,
            InvestmentStatus::Inactive => InvestmentStatusDb::Inactive,
        }
    }
}

impl From<InvestmentStatusDb> for InvestmentStatus {
    fn from(status: InvestmentStatusDb) -> Self {
        match status {
            InvestmentStatusDb::NeedsAction => InvestmentStatus::NeedsAction,
            InvestmentStatusDb::Pending => InvestmentStatus::Pending,
            InvestmentStatusDb::Confirmed => InvestmentStatus::Confirmed,
            InvestmentStatusDb::Declined => InvestmentStatus::Declined,
            InvestmentStatusDb::Withdrawn => InvestmentStatus::Withdrawn,
            InvestmentStatusDb::Inactive => InvestmentStatus::Inactive,
        }
    }
}

/// Database row mapping for the investments table.
#[derive(Debug, Clone, FromRow)]
pub struct InvestmentEntity {
    pub id: Uuid,
    pub fund_pool_id: Uuid,
    pub startup_id: Uuid,
    pub profile_id: Uuid,
    pub amount: i64,
    pub status: InvestmentStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InvestmentEntity> for Investment {
    fn from(entity: InvestmentEntity) -> Self {
        Self {
            id: entity.id,
            fund_pool_id: entity.fund_pool_id,
            startup_id: entity.startup_id,
            profile_id: entity.profile_id,
            amount: entity.amount,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
