//! CSV loader for penguin measurement files
//!
//! This module reads a penguin measurement CSV file and groups its rows by
//! normalized species name, leaving the measurement cells unparsed for the
//! aggregator to coerce later.
//!
//! ## Architecture
//!
//! - [`parser`] - Core loading orchestration and per-row handling
//! - [`columns`] - Header validation and column index resolution
//! - [`normalize`] - Species name normalization
//! - [`stats`] - Loading statistics and result structures

pub mod columns;
pub mod normalize;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnIndexes;
pub use normalize::normalize_species;
pub use parser::PenguinLoader;
pub use stats::{LoadResult, LoadStats};
