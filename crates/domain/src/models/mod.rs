//! Domain models for FundPool.

pub mod fund_pool;
pub mod investment;
pub mod notification;

pub use fund_pool::{CreateFundPoolRequest, FundPool, FundPoolDetails, FundPoolStatus};
pub use investment::{
    CreateInvestmentRequest, Investment, InvestmentStatus, ListInvestmentsQuery,
    ListInvestmentsResponse, NewInvestment,
};
pub use notification::{
    ListNotificationsQuery, ListNotificationsResponse, NewNotification, Notification,
    NotificationType,
};
