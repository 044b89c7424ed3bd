//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for draw results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full listings with distribution counts
    Full,
    /// Only the counts summary
    Summary,
    /// JSON output
    Json,
}

/// Export format for draw results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Two CSV files: assignments and the original roster
    Csv,
    /// One JSON document with roster, assignment and summary
    Json,
    /// Skip export
    None,
}

/// CLI arguments for alliance-draw
#[derive(Parser, Debug)]
#[command(name = "alliance-draw")]
#[command(author, version, about = "Randomly split a roster into two groups under per-category quotas")]
#[command(long_about = r#"
alliance-draw reads a delimited roster file (full name + binary category),
draws a uniform random assignment into two groups honoring the configured
per-category quotas, prints the groups and exports the assignment.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./alliance-draw.toml   Project-level config
3. ~/.config/alliance-draw/config.toml   Global config

Example:
  alliance-draw roster.csv
  alliance-draw roster.csv --seed 42 --output summary
  alliance-draw roster.csv --export json --export-dir results/
"#)]
pub struct Cli {
    /// Path to the roster file (not required with --show-config)
    pub roster: Option<PathBuf>,

    /// Seed for the random draw (omit for a fresh draw from system entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub export: ExportFormat,

    /// Directory export files are written into (overrides config)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress narration and color
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
