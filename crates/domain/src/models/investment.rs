//! Investment domain models for the fund pool lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Status of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    NeedsAction,
    Pending,
    Confirmed,
    Declined,
    Withdrawn,
    Inactive,
}

impl InvestmentStatus {
    /// All statuses, in declaration order.
    pub const ALL: [InvestmentStatus; 6] = [
        InvestmentStatus::NeedsAction,
        InvestmentStatus::Pending,
        InvestmentStatus::Confirmed,
        InvestmentStatus::Declined,
        InvestmentStatus::Withdrawn,
        InvestmentStatus::Inactive,
    ];

    /// Terminal statuses cannot be transitioned out of.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InvestmentStatus::Declined | InvestmentStatus::Withdrawn | InvestmentStatus::Inactive
        )
    }

    /// Active statuses count toward the one-active-investment-per-pool rule.
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// Parses the wire form (`needs_action`, `pending`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "needs_action" => Some(InvestmentStatus::NeedsAction),
            "pending" => Some(InvestmentStatus::Pending),
            "confirmed" => Some(InvestmentStatus::Confirmed),
            "declined" => Some(InvestmentStatus::Declined),
            "withdrawn" => Some(InvestmentStatus::Withdrawn),
            "inactive" => Some(InvestmentStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentStatus::NeedsAction => write!(f, "needs_action"),
            InvestmentStatus::Pending => write!(f, "pending"),
            InvestmentStatus::Confirmed => write!(f, "confirmed"),
            InvestmentStatus::Declined => write!(f, "declined"),
            InvestmentStatus::Withdrawn => write!(f, "withdrawn"),
            InvestmentStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// An investor's request to contribute to a startup's fund pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Investment {
    pub id: Uuid,
    pub fund_pool_id: Uuid,
    pub startup_id: Uuid,
    pub profile_id: Uuid,
    /// Whole currency units, always positive.
    pub amount: i64,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new investment.
///
/// Status is not a field here: new investments always start in
/// `needs_action`.
#[derive(Debug, Clone)]
pub struct NewInvestment {
    pub fund_pool_id: Uuid,
    pub startup_id: Uuid,
    pub profile_id: Uuid,
    pub amount: i64,
}

/// Request to create an investment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateInvestmentRequest {
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub amount: i64,
    pub fund_pool_id: Uuid,
    pub startup_id: Uuid,
    pub profile_id: Uuid,
}

/// Query parameters for listing investments on a pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListInvestmentsQuery {
    #[serde(default)]
    pub status: Option<String>,
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

/// Response for listing investments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListInvestmentsResponse {
    pub data: Vec<Investment>,
    pub pagination: shared::pagination::Pagination,
}
