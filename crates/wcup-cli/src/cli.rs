//! CLI argument definitions for the World Cup archive analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wcup",
    version,
    about = "World Cup archive analyzer - winner aggregates from the historical tables",
    long_about = "Analyze the FIFA World Cup archive tables.\n\n\
                  Loads the editions, matches, and players CSV files, coerces them\n\
                  into typed form, and reports four winner-centric aggregates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze the archive tables and print the winner aggregates.
    Analyze(AnalyzeArgs),

    /// List the expected source tables and their required columns.
    Tables,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Directory containing the archive CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Editions table path (default: <DATA_DIR>/WorldCups.csv).
    #[arg(long = "cups", value_name = "PATH")]
    pub cups: Option<PathBuf>,

    /// Matches table path (default: <DATA_DIR>/WorldCupMatches.csv).
    #[arg(long = "matches", value_name = "PATH")]
    pub matches: Option<PathBuf>,

    /// Players table path (default: <DATA_DIR>/WorldCupPlayers.csv).
    #[arg(long = "players", value_name = "PATH")]
    pub players: Option<PathBuf>,

    /// Print the aggregates as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
