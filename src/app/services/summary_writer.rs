//! Summary CSV persistence for per-species averages
//!
//! Writes the averages table to a CSV file with the header
//! `species,bill_length_mm,flipper_length_mm,body_mass_g`, one row per
//! species in insertion order. Writing is all-or-nothing: rows are written
//! to a temporary file in the destination directory which is persisted over
//! the target path only after a successful flush, so a failure never leaves
//! a partial summary behind.

use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::app::models::AveragesTable;
use crate::{Error, Result};

/// Write the per-species summary CSV, returning the file size in bytes
///
/// Absent fields are written as empty cells. An existing file at `path` is
/// replaced atomically.
pub fn write_summary(table: &AveragesTable, path: &Path) -> Result<u64> {
    debug!(
        "Writing summary for {} species to {}",
        table.len(),
        path.display()
    );

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in '{}'", dir.display()),
            e,
        )
    })?;

    {
        // Header is written explicitly so an empty table still produces a
        // well-formed summary file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp_file.as_file_mut());

        writer
            .write_record([
                crate::constants::SPECIES_COLUMN,
                crate::constants::BILL_LENGTH_COLUMN,
                crate::constants::FLIPPER_LENGTH_COLUMN,
                crate::constants::BODY_MASS_COLUMN,
            ])
            .map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    "Failed to write summary header",
                    Some(e),
                )
            })?;

        for row in table.rows() {
            writer.serialize(&row).map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    format!("Failed to write summary row for '{}'", row.species),
                    Some(e),
                )
            })?;
        }

        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush summary CSV", e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| Error::io(format!("Failed to persist '{}'", path.display()), e.error))?;

    let size = std::fs::metadata(path)
        .map_err(|e| Error::io(format!("Failed to stat '{}'", path.display()), e))?
        .len();

    info!(
        "Wrote {} species averages to {} ({} bytes)",
        table.len(),
        path.display(),
        size
    );

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{MeasurementField, SpeciesAverages, SummaryRow};
    use tempfile::TempDir;

    fn sample_table() -> AveragesTable {
        let mut table = AveragesTable::new();

        let mut adelie = SpeciesAverages::default();
        adelie.set(MeasurementField::BillLengthMm, 38.79);
        adelie.set(MeasurementField::FlipperLengthMm, 189.95);
        adelie.set(MeasurementField::BodyMassG, 3700.66);
        table.insert("Adelie", adelie);

        let mut gentoo = SpeciesAverages::default();
        gentoo.set(MeasurementField::BodyMassG, 5076.02);
        table.insert("Gentoo", gentoo);

        table
    }

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("penguin_averages.csv");

        write_summary(&sample_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "species,bill_length_mm,flipper_length_mm,body_mass_g"
        );
        assert!(lines.next().unwrap().starts_with("Adelie,"));
        assert!(lines.next().unwrap().starts_with("Gentoo,"));
    }

    #[test]
    fn test_absent_fields_written_as_empty_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");

        write_summary(&sample_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let gentoo_line = content.lines().find(|l| l.starts_with("Gentoo")).unwrap();
        assert_eq!(gentoo_line, "Gentoo,,,5076.02");
    }

    #[test]
    fn test_round_trip_values_match() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");
        let table = sample_table();

        write_summary(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let mut rows_seen = 0;
        for result in reader.deserialize::<SummaryRow>() {
            let row = result.unwrap();
            let averages = table.get(&row.species).unwrap();

            assert_eq!(row.bill_length_mm, averages.bill_length_mm);
            assert_eq!(row.flipper_length_mm, averages.flipper_length_mm);
            assert_eq!(row.body_mass_g, averages.body_mass_g);
            rows_seen += 1;
        }
        assert_eq!(rows_seen, table.len());
    }

    #[test]
    fn test_replaces_existing_file_completely() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");
        std::fs::write(&path, "stale content that should disappear").unwrap();

        write_summary(&sample_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("species,"));
    }

    #[test]
    fn test_reported_size_matches_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");

        let size = write_summary(&sample_table(), &path).unwrap();
        assert_eq!(size, std::fs::metadata(&path).unwrap().len());
        assert!(size > 0);
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("averages.csv");

        write_summary(&AveragesTable::new(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim(),
            "species,bill_length_mm,flipper_length_mm,body_mass_g"
        );
    }
}
