//! Investment repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{InvestmentEntity, InvestmentStatusDb};
use crate::metrics::QueryTimer;

/// Repository for investment-related database operations.
#[derive(Clone)]
pub struct InvestmentRepository {
    pool: PgPool,
}

impl InvestmentRepository {
    /// Creates a new InvestmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a new investment. Status starts at the database default
    /// of needs_action.
    pub async fn create(
        &self,
        fund_pool_id: Uuid,
        startup_id: Uuid,
        profile_id: Uuid,
        amount: i64,
    ) -> Result<InvestmentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_investment");
        let result = sqlx::query_as::<_, InvestmentEntity>(
            r#"
            INSERT INTO investments (fund_pool_id, startup_id, profile_id, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, fund_pool_id, startup_id, profile_id, amount, status,
                      created_at, updated_at
            "#,
        )
        .bind(fund_pool_id)
        .bind(startup_id)
        .bind(profile_id)
        .bind(amount)
        .fetch_one(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Find an investment by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<InvestmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_investment_by_id");
        let result = sqlx::query_as::<_, InvestmentEntity>(
            r#"
            SELECT id, fund_pool_id, startup_id, profile_id, amount, status,
                   created_at, updated_at
            FROM investments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Move an investment to a new status, guarded by the expected current
    /// status. Returns None when the row is missing or was updated by a
    /// concurrent request since it was loaded.
    pub async fn transition(
        &self,
        id: Uuid,
        from: InvestmentStatusDb,
        to: InvestmentStatusDb,
    ) -> Result<Option<InvestmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("transition_investment");
        let result = sqlx::query_as::<_, InvestmentEntity>(
            r#"
            UPDATE investments
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING id, fund_pool_id, startup_id, profile_id, amount, status,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Check whether the investor already holds a non-terminal investment
    /// in the given fund pool.
    pub async fn exists_active(
        &self,
        profile_id: Uuid,
        fund_pool_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("investment_exists_active");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM investments
                WHERE profile_id = $1 AND fund_pool_id = $2
                  AND status IN ('needs_action', 'pending', 'confirmed')
            )
            "#,
        )
        .bind(profile_id)
        .bind(fund_pool_id)
        .fetch_one(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// Sum of confirmed investment amounts for a fund pool.
    pub async fn sum_confirmed(&self, fund_pool_id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("sum_confirmed_investments");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(amount), 0)::BIGINT
            FROM investments
            WHERE fund_pool_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(fund_pool_id)
        .fetch_one(&self.pool)
        .await;
        timer.observe();
        result
    }

    /// List investments for a fund pool, newest first.
    pub async fn list_for_pool(
        &self,
        fund_pool_id: Uuid,
        status_filter: Option<InvestmentStatusDb>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvestmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_investments_for_pool");
        let result = if let Some(status) = status_filter {
            sqlx::query_as::<_, InvestmentEntity>(
                r#"
                SELECT id, fund_pool_id, startup_id, profile_id, amount, status,
                       created_at, updated_at
                FROM investments
                WHERE fund_pool_id = $1 AND status = $2
                ORDER BY created_at DESC
                LIMIT $3 OFFSET $4
                "#,
            )
            .bind(fund_pool_id)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, InvestmentEntity>(
                r#"
                SELECT id, fund_pool_id, startup_id, profile_id, amount, status,
                       created_at, updated_at
                FROM investments
                WHERE fund_pool_id = $1
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(fund_pool_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        };
        timer.observe();
        result
    }

    /// Count investments for a fund pool.
    pub async fn count_for_pool(
        &self,
        fund_pool_id: Uuid,
        status_filter: Option<InvestmentStatusDb>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_investments_for_pool");
        let result = if let Some(status) = status_filter {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM investments
                WHERE fund_pool_id = $1 AND status = $2
                "#,
            )
            .bind(fund_pool_id)
            .bind(status)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM investments
                WHERE fund_pool_id = $1
                "#,
            )
            .bind(fund_pool_id)
            .fetch_one(&self.pool)
            .await
        };
        timer.observe();
        result
    }
}
