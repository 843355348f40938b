//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod fund_pool;
pub mod investment;
pub mod notification;

pub use fund_pool::{FundPoolEntity, FundPoolStatusDb};
pub use investment::{InvestmentEntity, InvestmentStatusDb};
pub use notification::{NotificationEntity, NotificationTypeDb};
