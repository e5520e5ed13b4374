//! Command-line argument definitions for playerkit
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::SeasonMode;
use crate::constants::{SOURCE_ESPN, SUPPORTED_SOURCES};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the playerkit extractor
///
/// Extracts fantasy-baseball player records from saved player-rater HTML
/// pages and writes them as normalized JSON records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "playerkit",
    version,
    about = "Extract normalized fantasy-baseball player records from player-rater HTML",
    long_about = "Reads saved ESPN player-rater pages, extracts one record per player row \
                  (identity, team, ownership, positions, and role-relevant stat categories), \
                  and writes the normalized records as JSON for downstream storage or analysis."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for playerkit
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract player records from saved rater pages (main command)
    Process(ProcessArgs),
    /// List the canonical stat vocabulary
    Categories,
}

/// Arguments for the process command (main extraction)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input HTML file, or a directory of saved .html/.htm pages
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input HTML file or directory of saved rater pages"
    )]
    pub input_path: PathBuf,

    /// Output file for extracted records
    ///
    /// If not specified, records are written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for extracted JSON records"
    )]
    pub output_path: Option<PathBuf>,

    /// Data source the pages were saved from
    ///
    /// Currently supported: ESPN
    #[arg(
        short = 's',
        long = "source",
        value_name = "NAME",
        default_value = SOURCE_ESPN,
        help = "Data source name"
    )]
    pub source: String,

    /// Seasonal extraction mode
    ///
    /// Preseason projections report counting stats as whole numbers;
    /// in-season actuals report accumulated fractional values.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "actual",
        help = "Seasonal mode: projection or actual"
    )]
    pub mode: SeasonMode,

    /// Path to configuration file
    ///
    /// JSON configuration with source override data. If not specified,
    /// built-in defaults apply.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Keep processing remaining files when one fails
    ///
    /// By default the first file that fails to parse aborts the run.
    #[arg(
        long = "keep-going",
        help = "Skip files that fail to parse instead of aborting"
    )]
    pub keep_going: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON summary for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if !SUPPORTED_SOURCES.contains(&self.source.as_str()) {
            return Err(Error::unknown_source(&self.source));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output_path) = &self.output_path {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
