//! Loading statistics and result structures
//!
//! This module provides types for tracking loading success rates and
//! organizing loaded groups for downstream aggregation.

use crate::app::models::SpeciesGroups;

/// Loading result with grouped records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Records grouped by normalized species name
    pub groups: SpeciesGroups,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub rows_read: usize,

    /// Number of records successfully grouped
    pub records_loaded: usize,

    /// Number of rows skipped due to errors or an empty species cell
    pub rows_skipped: usize,

    /// Number of distinct species encountered
    pub species_count: usize,

    /// List of row-level problems for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            records_loaded: 0,
            rows_skipped: 0,
            species_count: 0,
            errors: Vec::new(),
        }
    }

    /// Record a skipped row with its reason
    pub fn skip_row(&mut self, message: String) {
        self.rows_skipped += 1;
        self.errors.push(message);
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
