//! Aggregation statistics and result structures

use crate::app::models::AveragesTable;

/// Aggregation result with averaged metrics and basic statistics
#[derive(Debug, Clone)]
pub struct AggregateResult {
    /// Per-species averages in species insertion order
    pub table: AveragesTable,

    /// Basic aggregation statistics
    pub stats: AggregateStats,
}

/// Statistics for one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregateStats {
    /// Number of species groups consumed
    pub species_in: usize,

    /// Number of species with at least one averaged field
    pub species_out: usize,

    /// Number of species discarded under the discard-species policy
    pub species_discarded: usize,

    /// Number of values that contributed to an average
    pub values_used: usize,

    /// Number of cells excluded as missing (empty or "NA")
    pub values_missing: usize,

    /// Number of non-missing cells that failed numeric parsing
    pub values_invalid: usize,

    /// List of value-level problems for debugging
    pub errors: Vec<String>,
}

impl AggregateStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid value with its description
    pub fn add_invalid(&mut self, message: String) {
        self.values_invalid += 1;
        self.errors.push(message);
    }

    /// Fraction of input species that produced output, as a percentage
    pub fn inclusion_rate(&self) -> f64 {
        if self.species_in == 0 {
            100.0
        } else {
            (self.species_out as f64 / self.species_in as f64) * 100.0
        }
    }
}
