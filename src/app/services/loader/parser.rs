//! Core CSV loading implementation
//!
//! This module provides the main loader orchestration: file reading, header
//! validation, species normalization, and per-row grouping with graceful
//! skipping of malformed rows.

use std::path::Path;
use tracing::{debug, info, warn};

use super::columns::ColumnIndexes;
use super::normalize::normalize_species;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::{MeasurementField, RawRecord, SpeciesGroups};
use crate::{Error, Result};

/// CSV loader for penguin measurement files
///
/// The loader focuses on essential functionality:
/// - Required-column validation against the header row
/// - Species name normalization so grouping keys always match
/// - Row-order preservation within each species group
/// - Graceful skipping of malformed rows, tracked in statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct PenguinLoader;

impl PenguinLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load a penguin CSV file and return grouped records with statistics
    ///
    /// Fails fast on a missing file, an unreadable file, or a header lacking
    /// one of the required columns. Individual bad rows are skipped and
    /// recorded in [`LoadStats`] instead of aborting the load.
    pub fn load_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading penguin CSV file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file_name = file_path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)
            .map_err(|e| Error::csv_parsing(&file_name, "Failed to open CSV reader", Some(e)))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::csv_parsing(&file_name, "Failed to read CSV header", Some(e)))?
            .clone();
        let columns = ColumnIndexes::analyze(&headers, &file_name)?;
        debug!(
            "Resolved columns: species at {}, {} header cells total",
            columns.species,
            headers.len()
        );

        let mut stats = LoadStats::new();
        let mut groups = SpeciesGroups::new();

        for result in reader.records() {
            stats.rows_read += 1;

            match result {
                Ok(record) => {
                    let species = normalize_species(record.get(columns.species).unwrap_or(""));
                    if species.is_empty() {
                        stats.skip_row(format!("Row {}: empty species cell", stats.rows_read));
                        debug!("Skipped row {}: empty species cell", stats.rows_read);
                        continue;
                    }

                    let cell = |field: MeasurementField| {
                        record.get(columns.field_index(field)).unwrap_or("")
                    };
                    let raw = RawRecord::new(
                        cell(MeasurementField::BillLengthMm),
                        cell(MeasurementField::FlipperLengthMm),
                        cell(MeasurementField::BodyMassG),
                    );

                    groups.push_record(species, raw);
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    stats.skip_row(format!(
                        "CSV parse error at row {}: {}",
                        stats.rows_read, e
                    ));
                }
            }
        }

        stats.species_count = groups.len();

        if stats.rows_skipped > 0 {
            warn!(
                "Skipped {} of {} rows while loading {}",
                stats.rows_skipped, stats.rows_read, file_name
            );
        }
        info!(
            "Loaded {} records across {} species from {} rows",
            stats.records_loaded, stats.species_count, stats.rows_read
        );

        Ok(LoadResult { groups, stats })
    }
}
