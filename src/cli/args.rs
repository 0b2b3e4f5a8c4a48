//! Command-line argument definitions for the penguin processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::aggregator::InvalidValuePolicy;
use crate::constants::DEFAULT_INPUT_FILE;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the penguin measurement processor
///
/// Summarizes a Palmer Penguins CSV dataset into per-species averages of
/// bill length, flipper length, and body mass.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "penguin-processor",
    version,
    about = "Summarize penguin measurement CSV data into per-species averages",
    long_about = "Reads a Palmer Penguins measurement CSV file, groups records by species, \
                  averages bill length, flipper length, and body mass (skipping missing \"NA\" \
                  values), reports the results, and optionally writes a per-species summary CSV."
)]
pub struct Args {
    /// Input CSV file with penguin measurements
    ///
    /// Must have a header row containing at least species, bill_length_mm,
    /// flipper_length_mm, and body_mass_g. A relative path is resolved
    /// against --base-dir.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        default_value = DEFAULT_INPUT_FILE,
        help = "Input CSV file with penguin measurements"
    )]
    pub input_file: PathBuf,

    /// Base directory for resolving relative input/output paths
    #[arg(
        long = "base-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Base directory for resolving relative paths"
    )]
    pub base_dir: PathBuf,

    /// Output CSV file for the per-species summary
    ///
    /// If not specified, no summary file is written. A relative path is
    /// resolved against --base-dir.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV file for per-species averages"
    )]
    pub output_file: Option<PathBuf>,

    /// How to handle measurement values that fail numeric parsing
    ///
    /// skip-value excludes the offending cell only, allowing partial
    /// averages; discard-species drops the whole species on any parse error.
    #[arg(
        long = "policy",
        value_enum,
        default_value = "skip-value",
        help = "Invalid-value policy"
    )]
    pub policy: InvalidValuePolicy,

    /// Output format for the averages report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub output_format: OutputFormat,

    /// Load, aggregate, and report without writing any output file
    #[arg(long = "dry-run", help = "Skip writing the summary file")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format for the averages report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report, one block per species
    Human,
    /// Pretty-printed JSON array of species rows
    Json,
}

impl Args {
    /// Validate argument combinations that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(Error::configuration("Input file must not be empty"));
        }
        Ok(())
    }

    /// The tracing log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
