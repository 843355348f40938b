//! Repository implementations for database operations.

pub mod fund_pool;
pub mod investment;
pub mod notification;

pub use fund_pool::FundPoolRepository;
pub use investment::InvestmentRepository;
pub use notification::NotificationRepository;
