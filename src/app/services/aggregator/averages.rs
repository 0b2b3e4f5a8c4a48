//! Core averaging implementation
//!
//! Averaging is a pure function of the grouped records and the selected
//! policy: no I/O, no shared state, no mutation of the input.

use tracing::{debug, info, warn};

use super::policy::InvalidValuePolicy;
use super::stats::{AggregateResult, AggregateStats};
use crate::app::models::{AveragesTable, MeasurementField, RawRecord, SpeciesAverages, SpeciesGroups};
use crate::constants::{is_missing, round_decimals};

/// Per-species averaging of grouped measurement records
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    policy: InvalidValuePolicy,
}

impl Aggregator {
    /// Create an aggregator with the given invalid-value policy
    pub fn new(policy: InvalidValuePolicy) -> Self {
        Self { policy }
    }

    /// The policy this aggregator applies
    pub fn policy(&self) -> InvalidValuePolicy {
        self.policy
    }

    /// Compute per-species averages for all groups
    ///
    /// A species appears in the output only if at least one of its three
    /// fields produced a value. Species insertion order is preserved.
    pub fn aggregate(&self, groups: &SpeciesGroups) -> AggregateResult {
        let mut stats = AggregateStats::new();
        let mut table = AveragesTable::new();

        for (species, records) in groups.iter() {
            stats.species_in += 1;

            match self.collect_species(species, records, &mut stats) {
                Some(values) => {
                    let averages = Self::average_fields(&values, &mut stats);
                    if averages.is_empty() {
                        debug!("Species '{}' has no valid measurements, omitted", species);
                    } else {
                        table.insert(species, averages);
                        stats.species_out += 1;
                    }
                }
                None => {
                    stats.species_discarded += 1;
                    warn!(
                        "Species '{}' discarded due to invalid measurement value",
                        species
                    );
                }
            }
        }

        info!(
            "Averaged {} of {} species ({} values used, {} missing, {} invalid)",
            stats.species_out,
            stats.species_in,
            stats.values_used,
            stats.values_missing,
            stats.values_invalid
        );

        AggregateResult { table, stats }
    }

    /// Collect the parseable values for each field of one species
    ///
    /// Returns `None` when a parse failure occurs under the discard-species
    /// policy, indicating the whole species must be dropped.
    fn collect_species(
        &self,
        species: &str,
        records: &[RawRecord],
        stats: &mut AggregateStats,
    ) -> Option<[Vec<f64>; 3]> {
        let mut values: [Vec<f64>; 3] = Default::default();

        for record in records {
            for (slot, field) in values.iter_mut().zip(MeasurementField::ALL) {
                let cell = record.value(field);
                if is_missing(cell) {
                    stats.values_missing += 1;
                    continue;
                }

                // Non-finite parses ("NaN", "inf") are not averageable
                // measurements and fall through to the invalid-value policy
                match cell.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() => slot.push(value),
                    _ => {
                        stats.add_invalid(format!(
                            "{}: invalid {} value '{}'",
                            species, field, cell
                        ));
                        match self.policy {
                            InvalidValuePolicy::SkipValue => {
                                debug!("{}: skipped invalid {} value '{}'", species, field, cell);
                            }
                            InvalidValuePolicy::DiscardSpecies => return None,
                        }
                    }
                }
            }
        }

        Some(values)
    }

    /// Average each non-empty field collection, rounded to 2 decimals
    fn average_fields(values: &[Vec<f64>; 3], stats: &mut AggregateStats) -> SpeciesAverages {
        let mut averages = SpeciesAverages::default();

        for (collected, field) in values.iter().zip(MeasurementField::ALL) {
            if collected.is_empty() {
                continue;
            }
            let mean = collected.iter().sum::<f64>() / collected.len() as f64;
            averages.set(field, round_decimals(mean));
            stats.values_used += collected.len();
        }

        averages
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(InvalidValuePolicy::default())
    }
}
