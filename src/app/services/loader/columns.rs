//! Header validation and column index resolution
//!
//! Input files carry the four required columns in any order, usually mixed
//! with additional columns (island, sex, year, ...) that are ignored.

use crate::app::models::MeasurementField;
use crate::constants::SPECIES_COLUMN;
use crate::{Error, Result};
use csv::StringRecord;

/// Resolved column positions for the required CSV columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndexes {
    /// Position of the species column
    pub species: usize,

    /// Positions of the three measurement columns, in [`MeasurementField::ALL`] order
    fields: [usize; 3],
}

impl ColumnIndexes {
    /// Analyze a header row and resolve the required column positions
    ///
    /// Header cells are matched after trimming. A missing required column is
    /// a fatal schema error.
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::missing_column(name, file))
        };

        let species = find(SPECIES_COLUMN)?;
        let mut fields = [0usize; 3];
        for (slot, field) in fields.iter_mut().zip(MeasurementField::ALL) {
            *slot = find(field.column_name())?;
        }

        Ok(Self { species, fields })
    }

    /// Position of a measurement column
    pub fn field_index(&self, field: MeasurementField) -> usize {
        let slot = MeasurementField::ALL
            .iter()
            .position(|&f| f == field)
            .unwrap_or(0);
        self.fields[slot]
    }
}
