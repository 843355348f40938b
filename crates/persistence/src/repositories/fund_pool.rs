//! Fund pool repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::FundPoolEntity;
use crate::metrics::QueryTimer;

/// Repository for fund pool-related database operations.
#[derive(Clone)]
pub struct FundPoolRepository {
    pool: PgPool,
}

impl FundPoolRepository {
    /// Creates a new FundPoolRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a new fund pool. Status starts at the database default of open.
    pub async fn create(
        &self,
        startup_id: Uuid,
        fund_goal: i64,
    ) -> Result<FundPoolEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_fund_pool");
        let result = sqlx::query_as::<_, FundPoolEntity>(
            r#"
            INSERT INTO fund_pools (startup_id, fund_goal)
            VALUES ($1, $2)
            RETURNING id, startup_id, fund_goal, status, created_at, updated_at
            "#,
        )
        .bind(startup_id)
        .bind(fund_goal)
        .fetch_one(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Find a fund pool by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FundPoolEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_fund_pool_by_id");
        let result = sqlx::query_as::<_, FundPoolEntity>(
            r#"
            SELECT id, startup_id, fund_goal, status, created_at, updated_at
            FROM fund_pools
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Raise the fund goal to the given target if it is above the current
    /// goal. GREATEST keeps the goal monotonic under concurrent updates.
    /// Returns true when the pool row exists.
    pub async fn raise_goal(&self, id: Uuid, target: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("raise_fund_pool_goal");
        let result = sqlx::query(
            r#"
            UPDATE fund_pools
            SET fund_goal = GREATEST(fund_goal, $2), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(target)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected() > 0);
        timer.observe();
        result
    }
}
