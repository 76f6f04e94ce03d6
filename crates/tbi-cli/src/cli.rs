//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tbi-interp",
    version,
    about = "TBI assessment interpretation engine",
    long_about = "Merge OCR and entity-extraction output from medical \
                  assessment documents into canonical patient records,\n\
                  compute domain impairment verdicts, and assemble \
                  renderable interpretation reports."
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

    /// Allow patient-level values (PHI) in log output.
    ///
    /// By default patient names and scores are redacted from logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a folder of extraction output and generate reports.
    Batch(BatchArgs),

    /// List all canonical clinical fields.
    Fields,

    /// List the cognitive domains and their evaluation rules.
    Domains,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Folder containing per-document extraction output
    /// (<name>.ocr.json and <name>.extract.json files).
    #[arg(value_name = "BATCH_FOLDER")]
    pub batch_folder: PathBuf,

    /// Output directory for records and reports (default: <BATCH_FOLDER>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Drop report rows whose percentile is missing instead of rendering "N/A".
    #[arg(long = "omit-missing-rows")]
    pub omit_missing_rows: bool,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
