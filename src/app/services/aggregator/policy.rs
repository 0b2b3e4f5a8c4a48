//! Invalid-value policy selection
//!
//! A measurement cell that is non-missing but does not parse as a number can
//! be handled at two granularities. Both are supported and selectable from
//! the CLI; [`InvalidValuePolicy::SkipValue`] is the default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How to handle a non-missing cell that fails numeric parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidValuePolicy {
    /// Skip the offending value for that field only; partial averages are
    /// possible and each field is averaged independently
    #[default]
    SkipValue,

    /// Discard the entire species from the output on any parse failure,
    /// across all three fields
    DiscardSpecies,
}

impl std::fmt::Display for InvalidValuePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InvalidValuePolicy::SkipValue => "skip-value",
            InvalidValuePolicy::DiscardSpecies => "discard-species",
        };
        write!(f, "{}", name)
    }
}
