//! # Meridian Domain
//!
//! Business domain types and models for the Meridian rewards platform SDK.
//!
//! This crate contains:
//! - Resource data types (Program, Item, Reward, Order, ...)
//! - Request payload types used by write operations
//! - Domain constants (API version prefix, pagination defaults)
//!
//! ## Architecture
//! - No dependencies on other Meridian crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use types::*;
