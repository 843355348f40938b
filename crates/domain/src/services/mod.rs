//! Domain services for FundPool.
//!
//! Services contain business logic that operates on domain models.

pub mod lifecycle;
pub mod notification;
pub mod store;

pub use lifecycle::{check_transition, is_legal_transition, InvestmentLifecycle, LifecycleError};

pub use notification::{derive_notification, notification_for_status, NotificationAudience};

pub use store::{InMemoryStore, InvestmentStore, StoreError};
