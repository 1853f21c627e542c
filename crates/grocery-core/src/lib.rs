//! Grocery Core - Core types and algorithms for the grocery store backend
//!
//! This crate provides the pieces shared across the workspace:
//! - The `Customer` record persisted by the repository layer
//! - The missing-range algorithm behind the coding challenge endpoint

pub mod customer;
pub mod missing_ranges;

// Re-export commonly used types
pub use customer::{Customer, CustomerId};
pub use missing_ranges::{MissingRange, DOMAIN_MAX, DOMAIN_MIN};
