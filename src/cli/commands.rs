//! Command implementation for the penguin processor CLI
//!
//! Orchestrates the whole run: logging setup, configuration assembly, the
//! load → aggregate → report → persist pipeline, and the final summary.

use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::app::services::aggregator::{AggregateResult, Aggregator};
use crate::app::services::loader::{LoadResult, PenguinLoader};
use crate::app::services::{reporter, summary_writer};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::Result;

/// Statistics for one complete run, reported to the user on success
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of records loaded from the input file
    pub records_loaded: usize,
    /// Number of input rows skipped by the loader
    pub rows_skipped: usize,
    /// Number of distinct species loaded
    pub species_count: usize,
    /// Number of species with averaged output
    pub species_averaged: usize,
    /// Number of measurement cells that failed numeric parsing
    pub values_invalid: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Written summary file and its size in bytes, if persistence ran
    pub output: Option<(String, u64)>,
}

/// Main command runner
///
/// 1. Set up logging from the verbosity flags
/// 2. Assemble and validate configuration
/// 3. Load and aggregate the input file
/// 4. Emit the report and optionally persist the summary CSV
pub fn run(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting penguin processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = build_config(&args);
    config.validate()?;

    let input_path = config.resolved_input_path();
    let LoadResult {
        groups,
        stats: load_stats,
    } = PenguinLoader::new().load_file(&input_path)?;

    let aggregator = Aggregator::new(config.policy);
    let AggregateResult {
        table,
        stats: aggregate_stats,
    } = aggregator.aggregate(&groups);

    match args.output_format {
        OutputFormat::Human => reporter::print_human(&table),
        OutputFormat::Json => println!("{}", reporter::render_json(&table)?),
    }

    let output = match config.resolved_output_path() {
        Some(path) if config.dry_run => {
            info!("Dry run - skipping write of {}", path.display());
            None
        }
        Some(path) => {
            let size = summary_writer::write_summary(&table, &path)?;
            Some((path.display().to_string(), size))
        }
        None => None,
    };

    let stats = RunStats {
        records_loaded: load_stats.records_loaded,
        rows_skipped: load_stats.rows_skipped,
        species_count: load_stats.species_count,
        species_averaged: aggregate_stats.species_out,
        values_invalid: aggregate_stats.values_invalid,
        processing_time: start_time.elapsed(),
        output,
    };

    if args.output_format == OutputFormat::Human && !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
///
/// Logs go to stderr so stdout stays clean for reports and JSON output.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("penguin_processor={}", args.log_level())));

    let init_result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    // A second initialization (e.g. in tests) keeps the existing subscriber
    if init_result.is_ok() {
        debug!("Logging initialized at level: {}", args.log_level());
    }
}

/// Build the runtime configuration from CLI arguments
fn build_config(args: &Args) -> Config {
    let mut config = Config::new(args.base_dir.clone(), args.input_file.clone());
    config.output_file = args.output_file.clone();
    config.policy = args.policy;
    config.dry_run = args.dry_run;
    config
}

/// Print the end-of-run summary for human consumption
fn print_summary(stats: &RunStats) {
    let mut line = format!(
        "{} {} records loaded, {} of {} species averaged in {:.0?}",
        "Summary:".bold(),
        stats.records_loaded,
        stats.species_averaged,
        stats.species_count,
        stats.processing_time
    );
    if stats.rows_skipped > 0 {
        line.push_str(&format!(" ({} rows skipped)", stats.rows_skipped));
    }
    if stats.values_invalid > 0 {
        line.push_str(&format!(" ({} invalid values)", stats.values_invalid));
    }
    println!("{}", line);

    match &stats.output {
        Some((path, size)) => println!("Averages saved to {} ({} bytes)", path, size),
        None => {
            if stats.species_averaged > 0 {
                warn!("No output file configured, results were not persisted");
            }
        }
    }
}
