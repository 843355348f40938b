//! Fund pool domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Status of a fund pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundPoolStatus {
    Open,
    Completed,
}

impl std::fmt::Display for FundPoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FundPoolStatus::Open => write!(f, "open"),
            FundPoolStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A startup's fundraising target and its attached investments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FundPool {
    pub id: Uuid,
    pub startup_id: Uuid,
    /// Target amount in whole currency units. Only ever raised, never
    /// lowered, by the lifecycle service.
    pub fund_goal: i64,
    pub status: FundPoolStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to open a fund pool.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateFundPoolRequest {
    pub startup_id: Uuid,
    #[validate(custom(function = "shared::validation::validate_fund_goal"))]
    pub fund_goal: i64,
}

/// Fund pool with its confirmed investment total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FundPoolDetails {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub fund_goal: i64,
    /// Sum of amounts across confirmed investments on this pool.
    pub confirmed_total: i64,
    pub status: FundPoolStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FundPoolDetails {
    /// Combines a pool with its confirmed total.
    pub fn from_pool(pool: FundPool, confirmed_total: i64) -> Self {
        Self {
            id: pool.id,
            startup_id: pool.startup_id,
            fund_goal: pool.fund_goal,
            confirmed_total,
            status: pool.status,
            created_at: pool.created_at,
            updated_at: pool.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_pool_status_display() {
        assert_eq!(FundPoolStatus::Open.to_string(), "open");
        assert_eq!(FundPoolStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_fund_pool_status_serde_wire_form() {
        let json = serde_json::to_string(&FundPoolStatus::Open).unwrap();
        assert_eq!(json, r#""open""#);

        let parsed: FundPoolStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(parsed, FundPoolStatus::Completed);
    }

    #[test]
    fn test_create_fund_pool_request_deserialize() {
        let json = r#"{
            "startup_id": "33333333-3333-3333-3333-333333333333",
            "fund_goal": 5000
        }"#;
        let req: CreateFundPoolRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.fund_goal, 5000);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_fund_pool_request_rejects_bad_goal() {
        let json = r#"{
            "startup_id": "33333333-3333-3333-3333-333333333333",
            "fund_goal": 0
        }"#;
        let req: CreateFundPoolRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_fund_pool_details_from_pool() {
        let pool = FundPool {
            id: Uuid::nil(),
            startup_id: Uuid::nil(),
            fund_goal: 10_000,
            status: FundPoolStatus::Open,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let details = FundPoolDetails::from_pool(pool, 2_500);
        assert_eq!(details.fund_goal, 10_000);
        assert_eq!(details.confirmed_total, 2_500);
    }
}
