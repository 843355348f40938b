//! Shared utilities and common types for FundPool backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic for monetary values
//! - Offset pagination helpers for list endpoints

pub mod pagination;
pub mod validation;
