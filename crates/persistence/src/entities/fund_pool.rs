//! Fund pool entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{FundPool, FundPoolStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for fund pool status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "fund_pool_status", rename_all = "lowercase")]
pub enum FundPoolStatusDb {
    Open,
    Completed,
}

impl From<FundPoolStatus> for FundPoolStatusDb {
    fn from(status: FundPoolStatus) -> Self {
        match status {
            FundPoolStatus::Open => FundPoolStatusDb::Open,
            FundPoolStatus::Completed => FundPoolStatusDb::Completed,
        }
    }
}

impl From<FundPoolStatusDb> for FundPoolStatus {
    fn from(status: FundPoolStatusDb) -> Self {
        match status {
            FundPoolStatusDb::Open => FundPoolStatus::Open,
            FundPoolStatusDb::Completed => FundPoolStatus::Completed,
        }
    }
}

/// Database row mapping for the fund_pools table.
#[derive(Debug, Clone, FromRow)]
pub struct FundPoolEntity {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub fund_goal: i64,
    pub status: FundPoolStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FundPoolEntity> for FundPool {
    fn from(entity: FundPoolEntity) -> Self {
        Self {
            id: entity.id,
            startup_id: entity.startup_id,
            fund_goal: entity.fund_goal,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
