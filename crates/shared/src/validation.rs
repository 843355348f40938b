//! Common validation utilities.

use validator::ValidationError;

/// Validates that an investment amount is strictly positive.
pub fn validate_amount(amount: i64) -> Result<(), ValidationError> {
    if amount > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_positive");
        err.message = Some("Amount must be greater than zero".into());
        Err(err)
    }
}

/// Validates that a fund goal is strictly positive.
pub fn validate_fund_goal(goal: i64) -> Result<(), ValidationError> {
    if goal > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("fund_goal_positive");
        err.message = Some("Fund goal must be greater than zero".into());
        Err(err)
    }
}
