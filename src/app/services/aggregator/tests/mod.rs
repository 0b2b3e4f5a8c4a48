//! Test utilities for aggregator testing

use crate::app::models::{RawRecord, SpeciesGroups};


/// Build groups from (species, [(bill, flipper, mass)]) tuples
pub fn groups_from(entries: &[(&str, &[(&str, &str, &str)])]) -> SpeciesGroups {
    let mut groups = SpeciesGroups::new();
    for (species, records) in entries {
        for (bill, flipper, mass) in records.iter() {
            groups.push_record(*species, RawRecord::new(*bill, *flipper, *mass));
        }
    }
    groups
}

/// A grouping with clean values for two species, Gentoo heavier than Adelie
pub fn sample_groups() -> SpeciesGroups {
    groups_from(&[
        (
            "Adelie",
            &[
                ("39.1", "181", "3750"),
                ("39.5", "186", "3800"),
                ("40.3", "195", "3250"),
            ],
        ),
        (
            "Gentoo",
            &[("47.6", "214", "5050"), ("46.1", "211", "4500")],
        ),
    ])
}
