//! Data models for penguin measurement processing
//!
//! This module contains the core data structures for representing raw
//! measurement records grouped by species and the averaged metrics derived
//! from them. Both grouping structures preserve species insertion order so
//! reports and summary files list species in the order they first appear in
//! the input file.

use crate::constants::{BILL_LENGTH_COLUMN, BODY_MASS_COLUMN, FLIPPER_LENGTH_COLUMN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// =============================================================================
// Measurement Field Enumeration
// =============================================================================

/// The three numeric measurement fields tracked per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementField {
    /// Bill length in millimeters
    BillLengthMm,
    /// Flipper length in millimeters
    FlipperLengthMm,
    /// Body mass in grams
    BodyMassG,
}

impl MeasurementField {
    /// All measurement fields in canonical column order
    pub const ALL: [MeasurementField; 3] = [
        MeasurementField::BillLengthMm,
        MeasurementField::FlipperLengthMm,
        MeasurementField::BodyMassG,
    ];

    /// The CSV column name for this field
    pub fn column_name(self) -> &'static str {
        match self {
            MeasurementField::BillLengthMm => BILL_LENGTH_COLUMN,
            MeasurementField::FlipperLengthMm => FLIPPER_LENGTH_COLUMN,
            MeasurementField::BodyMassG => BODY_MASS_COLUMN,
        }
    }

    /// Human-readable label with units, used in console reports
    pub fn label(self) -> &'static str {
        match self {
            MeasurementField::BillLengthMm => "Bill Length (mm)",
            MeasurementField::FlipperLengthMm => "Flipper Length (mm)",
            MeasurementField::BodyMassG => "Body Mass (g)",
        }
    }
}

impl FromStr for MeasurementField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            BILL_LENGTH_COLUMN => Ok(MeasurementField::BillLengthMm),
            FLIPPER_LENGTH_COLUMN => Ok(MeasurementField::FlipperLengthMm),
            BODY_MASS_COLUMN => Ok(MeasurementField::BodyMassG),
            other => Err(Error::data_validation(format!(
                "Unknown measurement field '{}'",
                other
            ))),
        }
    }
}

// Display uses the column name so log messages and errors carry the same
// identifiers as the CSV header.
impl std::fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

// =============================================================================
// Raw Record Structure
// =============================================================================

/// A single measurement record exactly as read from a CSV row
///
/// All fields are unparsed strings and may be empty or hold the missing
/// marker. Records are immutable once created and owned by [`SpeciesGroups`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Raw bill length cell
    pub bill_length_mm: String,

    /// Raw flipper length cell
    pub flipper_length_mm: String,

    /// Raw body mass cell
    pub body_mass_g: String,
}

impl RawRecord {
    /// Create a record from the three raw CSV cells
    pub fn new(
        bill_length_mm: impl Into<String>,
        flipper_length_mm: impl Into<String>,
        body_mass_g: impl Into<String>,
    ) -> Self {
        Self {
            bill_length_mm: bill_length_mm.into(),
            flipper_length_mm: flipper_length_mm.into(),
            body_mass_g: body_mass_g.into(),
        }
    }

    /// Get the raw cell for a measurement field
    pub fn value(&self, field: MeasurementField) -> &str {
        match field {
            MeasurementField::BillLengthMm => &self.bill_length_mm,
            MeasurementField::FlipperLengthMm => &self.flipper_length_mm,
            MeasurementField::BodyMassG => &self.body_mass_g,
        }
    }
}

// =============================================================================
// Species Groups Structure
// =============================================================================

/// Measurement records partitioned by normalized species name
///
/// Preserves both species insertion order and row order within each species.
/// Built once per loader invocation and not mutated afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesGroups {
    groups: HashMap<String, Vec<RawRecord>>,
    order: Vec<String>,
}

impl SpeciesGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a species group, creating the group on first encounter
    pub fn push_record(&mut self, species: impl Into<String>, record: RawRecord) {
        let species = species.into();
        if !self.groups.contains_key(&species) {
            self.order.push(species.clone());
        }
        self.groups.entry(species).or_default().push(record);
    }

    /// Insert a whole group at once, replacing any existing records
    ///
    /// Accepts an empty record list, which registers the species without any
    /// measurements.
    pub fn insert_group(&mut self, species: impl Into<String>, records: Vec<RawRecord>) {
        let species = species.into();
        if !self.groups.contains_key(&species) {
            self.order.push(species.clone());
        }
        self.groups.insert(species, records);
    }

    /// Iterate species names in insertion order
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Get the records for a species, if present
    pub fn records(&self, species: &str) -> Option<&[RawRecord]> {
        self.groups.get(species).map(Vec::as_slice)
    }

    /// Iterate (species, records) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawRecord])> {
        self.order
            .iter()
            .map(|species| (species.as_str(), self.groups[species].as_slice()))
    }

    /// Number of distinct species
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether no species have been loaded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of records across all species
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

// =============================================================================
// Averaged Metrics Structures
// =============================================================================

/// Averaged measurements for one species
///
/// Each field is individually optional: a field with no valid values in the
/// input is absent rather than carrying a sentinel value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesAverages {
    /// Mean bill length in millimeters, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_length_mm: Option<f64>,

    /// Mean flipper length in millimeters, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flipper_length_mm: Option<f64>,

    /// Mean body mass in grams, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_mass_g: Option<f64>,
}

impl SpeciesAverages {
    /// Get the averaged value for a measurement field
    pub fn get(&self, field: MeasurementField) -> Option<f64> {
        match field {
            MeasurementField::BillLengthMm => self.bill_length_mm,
            MeasurementField::FlipperLengthMm => self.flipper_length_mm,
            MeasurementField::BodyMassG => self.body_mass_g,
        }
    }

    /// Set the averaged value for a measurement field
    pub fn set(&mut self, field: MeasurementField, value: f64) {
        match field {
            MeasurementField::BillLengthMm => self.bill_length_mm = Some(value),
            MeasurementField::FlipperLengthMm => self.flipper_length_mm = Some(value),
            MeasurementField::BodyMassG => self.body_mass_g = Some(value),
        }
    }

    /// Check whether all three fields are absent
    pub fn is_empty(&self) -> bool {
        MeasurementField::ALL.iter().all(|&f| self.get(f).is_none())
    }
}

/// One row of the per-species summary, used for JSON and CSV serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Normalized species name
    pub species: String,

    /// Mean bill length, empty in CSV / absent in JSON when no valid values
    pub bill_length_mm: Option<f64>,

    /// Mean flipper length
    pub flipper_length_mm: Option<f64>,

    /// Mean body mass
    pub body_mass_g: Option<f64>,
}

/// Averaged metrics for all species, in species insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AveragesTable {
    entries: HashMap<String, SpeciesAverages>,
    order: Vec<String>,
}

impl AveragesTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the averages for a species, appending to the iteration order
    ///
    /// Re-inserting a species updates its averages without changing its
    /// position.
    pub fn insert(&mut self, species: impl Into<String>, averages: SpeciesAverages) {
        let species = species.into();
        if !self.entries.contains_key(&species) {
            self.order.push(species.clone());
        }
        self.entries.insert(species, averages);
    }

    /// Get the averages for a species, if present
    pub fn get(&self, species: &str) -> Option<&SpeciesAverages> {
        self.entries.get(species)
    }

    /// Iterate species names in insertion order
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Iterate (species, averages) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpeciesAverages)> {
        self.order
            .iter()
            .map(|species| (species.as_str(), &self.entries[species]))
    }

    /// Number of species with at least one averaged field
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the table holds no species
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flatten into summary rows in insertion order
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.iter()
            .map(|(species, averages)| SummaryRow {
                species: species.to_string(),
                bill_length_mm: averages.bill_length_mm,
                flipper_length_mm: averages.flipper_length_mm,
                body_mass_g: averages.body_mass_g,
            })
            .collect()
    }
}
