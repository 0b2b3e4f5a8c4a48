//! Tests for header validation and column index resolution

use crate::app::models::MeasurementField;
use crate::app::services::loader::columns::ColumnIndexes;
use crate::Error;
use csv::StringRecord;

fn header(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

#[test]
fn test_resolves_columns_in_any_order() {
    let headers = header(&[
        "body_mass_g",
        "island",
        "species",
        "flipper_length_mm",
        "bill_length_mm",
    ]);
    let columns = ColumnIndexes::analyze(&headers, "test.csv").unwrap();

    assert_eq!(columns.species, 2);
    assert_eq!(columns.field_index(MeasurementField::BodyMassG), 0);
    assert_eq!(columns.field_index(MeasurementField::FlipperLengthMm), 3);
    assert_eq!(columns.field_index(MeasurementField::BillLengthMm), 4);
}

#[test]
fn test_extra_columns_are_ignored() {
    let headers = header(&[
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ]);
    assert!(ColumnIndexes::analyze(&headers, "test.csv").is_ok());
}

#[test]
fn test_header_cells_matched_after_trimming() {
    let headers = header(&[
        " species ",
        "bill_length_mm",
        "flipper_length_mm",
        "body_mass_g",
    ]);
    let columns = ColumnIndexes::analyze(&headers, "test.csv").unwrap();
    assert_eq!(columns.species, 0);
}

#[test]
fn test_missing_column_is_schema_error() {
    let headers = header(&["species", "bill_length_mm", "flipper_length_mm"]);
    let error = ColumnIndexes::analyze(&headers, "test.csv").unwrap_err();

    match error {
        Error::MissingColumn { column, file } => {
            assert_eq!(column, "body_mass_g");
            assert_eq!(file, "test.csv");
        }
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_missing_species_column_is_schema_error() {
    let headers = header(&["bill_length_mm", "flipper_length_mm", "body_mass_g"]);
    let error = ColumnIndexes::analyze(&headers, "test.csv").unwrap_err();
    assert!(matches!(error, Error::MissingColumn { column, .. } if column == "species"));
}
