//! CLI argument definitions for the ledger rollup.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rollup",
    version,
    about = "Ledger rollup - monthly per-customer transaction summaries",
    long_about = "Clean customer and transaction CSV files, drop incomplete, duplicate,\n\
                  and orphaned rows, and write an ordered monthly per-customer summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Run the rollup over a data folder and write the monthly summary.
    Run(RunArgs),

    /// Print the declared input schemas.
    Schema,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the data folder containing customers.csv and transactions.csv.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Customers CSV path (default: <DATA_DIR>/customers.csv).
    #[arg(long = "customers", value_name = "PATH")]
    pub customers: Option<PathBuf>,

    /// Transactions CSV path (default: <DATA_DIR>/transactions.csv).
    #[arg(long = "transactions", value_name = "PATH")]
    pub transactions: Option<PathBuf>,

    /// Output directory for the summary (default: <DATA_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Summary file name within the output directory.
    #[arg(
        long = "output-file",
        value_name = "NAME",
        default_value = "transformed_transactions_monthly.csv"
    )]
    pub output_file: String,

    /// Run the full transform and print the summary without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write run_report.json next to the summary.
    #[arg(long = "report-json")]
    pub report_json: bool,
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
