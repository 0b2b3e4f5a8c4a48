//! Application constants for the penguin processor
//!
//! This module contains the column names, missing-value conventions, and
//! default values used throughout the penguin processor application.

// =============================================================================
// CSV Column Names
// =============================================================================

/// Column holding the species name
pub const SPECIES_COLUMN: &str = "species";

/// Column holding the bill length measurement in millimeters
pub const BILL_LENGTH_COLUMN: &str = "bill_length_mm";

/// Column holding the flipper length measurement in millimeters
pub const FLIPPER_LENGTH_COLUMN: &str = "flipper_length_mm";

/// Column holding the body mass measurement in grams
pub const BODY_MASS_COLUMN: &str = "body_mass_g";

// =============================================================================
// Missing Value Conventions
// =============================================================================

/// Literal marker denoting an absent measurement (matched case-insensitively)
pub const MISSING_MARKER: &str = "NA";

/// Check whether a raw CSV cell denotes a missing measurement
///
/// An empty (or whitespace-only) cell and the literal marker "NA" in any
/// casing both count as missing.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(MISSING_MARKER)
}

// =============================================================================
// Averaging Conventions
// =============================================================================

/// Number of decimal places averaged values are rounded to
pub const ROUND_DECIMALS: u32 = 2;

/// Round a value to [`ROUND_DECIMALS`] decimal places, half away from zero
pub fn round_decimals(value: f64) -> f64 {
    let factor = 10f64.powi(ROUND_DECIMALS as i32);
    (value * factor).round() / factor
}

// =============================================================================
// Default File Names
// =============================================================================

/// Default input file name, resolved against the configured base directory
pub const DEFAULT_INPUT_FILE: &str = "penguins.csv";

/// Default output file name for the per-species summary CSV
pub const DEFAULT_OUTPUT_FILE: &str = "penguin_averages.csv";
