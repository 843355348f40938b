//! Domain layer for FundPool backend.
//!
//! This crate contains:
//! - Domain models (Investment, FundPool, Notification)
//! - The investment lifecycle service and its persistence seam
//! - Domain error types

pub mod models;
pub mod services;
