//! HTTP route handlers.

pub mod fund_pools;
pub mod health;
pub mod investments;
pub mod notifications;
