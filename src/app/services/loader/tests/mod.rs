//! Test utilities for loader testing
//!
//! Provides fixture CSV content and temporary-file helpers shared across the
//! loader test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod columns_tests;

/// A small but realistic slice of the Palmer Penguins dataset, including
/// extra columns the loader must ignore and missing-value markers.
pub fn sample_penguins_csv() -> &'static str {
    "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex\n\
     Adelie,Torgersen,39.1,18.7,181,3750,male\n\
     Adelie,Torgersen,39.5,17.4,186,3800,female\n\
     adelie,Biscoe,NA,NA,190,3700,\n\
     Gentoo,Biscoe,47.6,14.5,214,5050,male\n\
     GENTOO,Biscoe,46.1,13.2,211,4500,female\n\
     Chinstrap,Dream,46.5,17.9,192,3500,female\n"
}

/// CSV content whose header lacks the body_mass_g column
pub fn missing_column_csv() -> &'static str {
    "species,bill_length_mm,flipper_length_mm\n\
     Adelie,39.1,181\n"
}

/// Helper to create a temporary file with the given content
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
