//! Per-species averaging of penguin measurements
//!
//! This module consumes the loader's grouped records, coerces the raw cells
//! to numbers, and computes per-species means rounded to 2 decimal places.
//! Missing values (empty cells or the "NA" marker) are always excluded; what
//! happens on a non-missing cell that fails to parse is governed by the
//! selected [`InvalidValuePolicy`].
//!
//! ## Architecture
//!
//! - [`averages`] - Core averaging implementation
//! - [`policy`] - Invalid-value policy selection
//! - [`stats`] - Aggregation statistics and result structures

pub mod averages;
pub mod policy;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use averages::Aggregator;
pub use policy::InvalidValuePolicy;
pub use stats::{AggregateResult, AggregateStats};
