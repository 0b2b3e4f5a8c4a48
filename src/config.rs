//! Configuration management and validation
//!
//! Provides the resolved runtime configuration for a processing run: where
//! the input lives, where the summary goes, and which aggregation policy to
//! apply. Relative paths are always resolved against an explicit base
//! directory rather than the location of the running executable.

use crate::app::services::aggregator::InvalidValuePolicy;
use crate::constants::DEFAULT_INPUT_FILE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for one processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base directory against which relative input/output paths are resolved
    pub base_dir: PathBuf,

    /// Input CSV file, absolute or relative to `base_dir`
    pub input_file: PathBuf,

    /// Summary CSV file, absolute or relative to `base_dir`; `None` disables
    /// persistence
    pub output_file: Option<PathBuf>,

    /// How to handle non-missing cells that fail numeric parsing
    pub policy: InvalidValuePolicy,

    /// Load, aggregate, and report without writing any file
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: None,
            policy: InvalidValuePolicy::default(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Create a configuration with the given base directory and input file
    pub fn new(base_dir: impl Into<PathBuf>, input_file: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            input_file: input_file.into(),
            ..Self::default()
        }
    }

    /// Set the output file for summary persistence
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Set the invalid-value policy
    pub fn with_policy(mut self, policy: InvalidValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(Error::configuration("Input file must not be empty"));
        }

        if !self.base_dir.exists() {
            return Err(Error::configuration(format!(
                "Base directory '{}' does not exist",
                self.base_dir.display()
            )));
        }

        if !self.base_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Base path '{}' is not a directory",
                self.base_dir.display()
            )));
        }

        Ok(())
    }

    /// The input path with `base_dir` applied to a relative input file
    pub fn resolved_input_path(&self) -> PathBuf {
        Self::resolve(&self.base_dir, &self.input_file)
    }

    /// The output path with `base_dir` applied, if persistence is enabled
    pub fn resolved_output_path(&self) -> Option<PathBuf> {
        self.output_file
            .as_ref()
            .map(|file| Self::resolve(&self.base_dir, file))
    }

    fn resolve(base_dir: &Path, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            base_dir.join(file)
        }
    }
}
