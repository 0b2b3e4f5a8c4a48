//! Console reporting for per-species averages
//!
//! Renders the averages table in human-readable form (one block per species,
//! in species insertion order) or as pretty-printed JSON for machine
//! consumption. Reports go to stdout; logging stays on stderr.

use colored::Colorize;
use serde::Serialize;

use crate::app::models::{AveragesTable, MeasurementField, SpeciesAverages};
use crate::{Error, Result};

/// Placeholder printed for a field with no valid values
const ABSENT_FIELD: &str = "--";

/// Print the human-readable averages report to stdout
pub fn print_human(table: &AveragesTable) {
    println!("{}", render_human(table));
}

/// Render the human-readable averages report
///
/// Each species gets one block listing the three fields; a field with no
/// valid values is shown as `--`.
pub fn render_human(table: &AveragesTable) -> String {
    let mut out = String::new();
    let heading = "Average Measurements by Species";
    out.push_str(&format!("{}\n", heading.bold()));
    out.push_str(&format!("{}\n", "=".repeat(heading.len())));

    if table.is_empty() {
        out.push_str("\nNo species with valid measurements.\n");
        return out;
    }

    for (species, averages) in table.iter() {
        out.push_str(&format!("\n{}:\n", species.cyan().bold()));
        for field in MeasurementField::ALL {
            let rendered = match averages.get(field) {
                Some(value) => format!("{:.2}", value),
                None => ABSENT_FIELD.to_string(),
            };
            out.push_str(&format!("  {:<21} {}\n", format!("{}:", field.label()), rendered));
        }
    }

    out
}

/// JSON row shape: species name plus only the fields that have values
#[derive(Serialize)]
struct JsonRow<'a> {
    species: &'a str,
    #[serde(flatten)]
    averages: &'a SpeciesAverages,
}

/// Render the averages as pretty-printed JSON
///
/// Serialized as an array of row objects so species insertion order is
/// preserved; absent fields are omitted from each object.
pub fn render_json(table: &AveragesTable) -> Result<String> {
    let rows: Vec<JsonRow> = table
        .iter()
        .map(|(species, averages)| JsonRow { species, averages })
        .collect();

    serde_json::to_string_pretty(&rows)
        .map_err(|e| Error::data_validation(format!("Failed to serialize averages: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::SpeciesAverages;

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
    fn test_human_report_lists_species_in_order() {
        let rendered = render_human(&sample_table());

        let adelie_pos = rendered.find("Adelie").unwrap();
        let gentoo_pos = rendered.find("Gentoo").unwrap();
        assert!(adelie_pos < gentoo_pos);
    }

    #[test]
    fn test_human_report_formats_values_and_absences() {
        let rendered = render_human(&sample_table());

        assert!(rendered.contains("3700.66"));
        assert!(rendered.contains("Bill Length (mm)"));
        // Gentoo has only body mass; the other fields render as --
        assert!(rendered.contains(ABSENT_FIELD));
    }

    #[test]
    fn test_human_report_empty_table() {
        let rendered = render_human(&AveragesTable::new());
        assert!(rendered.contains("No species"));
    }

    #[test]
    fn test_json_report_preserves_order_and_omits_absent_fields() {
        let json = render_json(&sample_table()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["species"], "Adelie");
        assert_eq!(rows[1]["species"], "Gentoo");
        assert_eq!(rows[1]["body_mass_g"], 5076.02);
        assert!(rows[1].get("bill_length_mm").is_none());
    }
}
