//! Investment lifecycle service.
//!
//! Owns the status state machine for investments and the side effects of
//! each transition: the fund pool goal ratchet and notification records.
//!
//! The state machine:
//!
//! ```text
//! needs_action -> pending     (founder accepts)
//! needs_action -> declined    (founder declines)
//! needs_action -> withdrawn   (investor withdraws before the founder acts)
//! pending      -> confirmed   (investor confirms)
//! pending      -> withdrawn   (investor withdraws)
//! confirmed    -> inactive    (administrative deactivation)
//! ```
//!
//! `declined`, `withdrawn` and `inactive` are terminal. The status update
//! is the operation's contract; goal reconciliation and notification
//! inserts are best effort and never fail the caller.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    CreateInvestmentRequest, FundPoolStatus, Investment, InvestmentStatus, NewInvestment,
};
use crate::services::notification::derive_notification;
use crate::services::store::{InvestmentStore, StoreError};

/// Legal (current, requested) status pairs.
const LEGAL_TRANSITIONS: [(InvestmentStatus, InvestmentStatus); 6] = [
    (InvestmentStatus::NeedsAction, InvestmentStatus::Pending),
    (InvestmentStatus::NeedsAction, InvestmentStatus::Declined),
    (InvestmentStatus::NeedsAction, InvestmentStatus::Withdrawn),
    (InvestmentStatus::Pending, InvestmentStatus::Confirmed),
    (InvestmentStatus::Pending, InvestmentStatus::Withdrawn),
    (InvestmentStatus::Confirmed, InvestmentStatus::Inactive),
];

/// Error returned by lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: InvestmentStatus,
        to: InvestmentStatus,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("store operation failed: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LifecycleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateActive => LifecycleError::Conflict(
                "An active investment already exists for this investor and pool".to_string(),
            ),
            other => LifecycleError::Store(other),
        }
    }
}

/// True when `from -> to` appears in the transition table.
pub fn is_legal_transition(from: InvestmentStatus, to: InvestmentStatus) -> bool {
    LEGAL_TRANSITIONS.contains(&(from, to))
}

/// Rejects illegal transitions before any mutation.
pub fn check_transition(
    from: InvestmentStatus,
    to: InvestmentStatus,
) -> Result<(), LifecycleError> {
    if is_legal_transition(from, to) {
        Ok(())
    } else {
        Err(LifecycleError::InvalidTransition { from, to })
    }
}

/// Validates and applies investment lifecycle operations over a store.
pub struct InvestmentLifecycle<S> {
    store: S,
}

impl<S: InvestmentStore> InvestmentLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an investment against an open fund pool.
    ///
    /// The investment starts in `needs_action`; the owning startup is
    /// notified best-effort.
    pub async fn create_investment(
        &self,
        request: CreateInvestmentRequest,
    ) -> Result<Investment, LifecycleError> {
        if request.amount <= 0 {
            return Err(LifecycleError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let pool = self
            .store
            .fund_pool_by_id(request.fund_pool_id)
            .await?
            .ok_or_else(|| LifecycleError::NotFound("Fund pool not found".to_string()))?;

        if pool.status != FundPoolStatus::Open {
            return Err(LifecycleError::Validation(
                "Fund pool is not open for investment".to_string(),
            ));
        }

        if pool.startup_id != request.startup_id {
            return Err(LifecycleError::Validation(
                "Startup does not own this fund pool".to_string(),
            ));
        }

        if self
            .store
            .has_active_investment(request.profile_id, request.fund_pool_id)
            .await?
        {
            return Err(LifecycleError::Conflict(
                "An active investment already exists for this investor and pool".to_string(),
            ));
        }

        let investment = self
            .store
            .insert_investment(NewInvestment {
                fund_pool_id: pool.id,
                startup_id: pool.startup_id,
                profile_id: request.profile_id,
                amount: request.amount,
            })
            .await?;

        info!(
            investment_id = %investment.id,
            fund_pool_id = %investment.fund_pool_id,
            amount = investment.amount,
            "Created investment"
        );

        self.record_notification(&investment).await;

        Ok(investment)
    }

    /// Transitions an investment to `target` if the move is legal.
    ///
    /// On confirmation the pool goal is reconciled against the confirmed
    /// total. Both reconciliation and the notification insert are best
    /// effort; a failure there never revokes the status update.
    pub async fn transition(
        &self,
        investment_id: Uuid,
        target: InvestmentStatus,
    ) -> Result<Investment, LifecycleError> {
        let current = self
            .store
            .investment_by_id(investment_id)
            .await?
            .ok_or_else(|| LifecycleError::NotFound("Investment not found".to_string()))?;

        check_transition(current.status, target)?;

        let updated = self
            .store
            .update_investment_status(investment_id, current.status, target)
            .await?
            .ok_or_else(|| {
                LifecycleError::Conflict("Investment was modified concurrently".to_string())
            })?;

        info!(
            investment_id = %updated.id,
            from = %current.status,
            to = %target,
            "Transitioned investment"
        );

        if target == InvestmentStatus::Confirmed {
            self.reconcile_fund_goal(updated.fund_pool_id).await;
        }

        self.record_notification(&updated).await;

        Ok(updated)
    }

    /// Raises the pool goal to the confirmed total when that total exceeds
    /// the current goal. The goal only ever moves up through this path.
    async fn reconcile_fund_goal(&self, fund_pool_id: Uuid) {
        let total = match self.store.sum_confirmed(fund_pool_id).await {
            Ok(total) => total,
            Err(err) => {
                warn!(
                    fund_pool_id = %fund_pool_id,
                    error = %err,
                    "Goal reconciliation could not read confirmed total"
                );
                return;
            }
        };

        match self.store.raise_fund_goal(fund_pool_id, total).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(
                    fund_pool_id = %fund_pool_id,
                    "Fund pool missing during goal reconciliation"
                );
            }
            Err(err) => {
                warn!(
                    fund_pool_id = %fund_pool_id,
                    confirmed_total = total,
                    error = %err,
                    "Goal reconciliation could not update fund goal"
                );
            }
        }
    }

    /// Stores the notification derived from the investment's new status.
    async fn record_notification(&self, investment: &Investment) {
        let new = derive_notification(investment);
        if let Err(err) = self.store.insert_notification(new).await {
            warn!(
                investment_id = %investment.id,
                status = %investment.status,
                error = %err,
                "Failed to store lifecycle notification"
            );
        }
    }
}
