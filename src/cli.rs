//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Source`] - Supported chat export formats
//! - [`ReportArg`] - Report file format options
//!
//! # Using Source in Libraries
//!
//! ```rust
//! use chatlens::cli::Source;
//! use chatlens::parser::{ExportFormat, TranscriptParser};
//!
//! let parser = TranscriptParser::new(Source::Telegram.into());
//! assert_eq!(parser.format(), ExportFormat::Telegram);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, DEFAULT_TOP_WORDS};
use crate::format::ReportFormat;
use crate::parser::ExportFormat;

/// Default directory for the session snapshot.
pub const DEFAULT_SNAPSHOT_DIR: &str = ".chatlens";

/// Analyze WhatsApp, Telegram and Facebook chat exports: activity,
/// sentiment, top words and awards.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -f telegram --top 20
    chatlens chat.txt -f fb -o report.json
    chatlens chat.txt --report csv -o users.csv
    chatlens                      # re-analyze the last transcript")]
pub struct Args {
    /// Path to the exported transcript (.txt). Omit to re-analyze the saved snapshot
    pub input: Option<PathBuf>,

    /// Export format of the transcript
    #[arg(short, long, value_enum, default_value = "whatsapp")]
    pub format: Source,

    /// Write the report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report file format (detected from the output extension if omitted)
    #[arg(long, value_enum)]
    pub report: Option<ReportArg>,

    /// Number of top words to show
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Directory for the session snapshot
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SNAPSHOT_DIR)]
    pub snapshot_dir: PathBuf,

    /// Do not save the parsed transcript as a snapshot
    #[arg(long)]
    pub no_snapshot: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analyzer configuration from the arguments.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_top_words(self.top)
            .with_persist_snapshots(!self.no_snapshot)
    }

    /// Report format for the output file, if one was requested.
    ///
    /// An explicit `--report` wins over the output extension.
    pub fn report_format(&self) -> Option<Result<ReportFormat, crate::ChatlensError>> {
        let output = self.output.as_ref()?;
        Some(match self.report {
            Some(report) => Ok(report.into()),
            None => ReportFormat::from_path(output),
        })
    }

    /// Default log filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Supported chat export formats.
///
/// - [`WhatsApp`](Source::WhatsApp) - `date, time - sender: text` or `[date, time] sender: text`
/// - [`Telegram`](Source::Telegram) - `dd.mm.yyyy, time - sender: text`
/// - [`Facebook`](Source::Facebook) - `date, time - sender: text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// WhatsApp TXT export
    #[value(name = "whatsapp", alias = "wa")]
    #[serde(alias = "wa")]
    WhatsApp,

    /// Telegram TXT export
    #[value(alias = "tg")]
    #[serde(alias = "tg")]
    Telegram,

    /// Facebook Messenger TXT export
    #[value(alias = "fb")]
    #[serde(alias = "fb")]
    Facebook,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::WhatsApp => write!(f, "WhatsApp"),
            Source::Telegram => write!(f, "Telegram"),
            Source::Facebook => write!(f, "Facebook"),
        }
    }
}

impl From<Source> for ExportFormat {
    fn from(source: Source) -> ExportFormat {
        match source {
            Source::WhatsApp => ExportFormat::WhatsApp,
            Source::Telegram => ExportFormat::Telegram,
            Source::Facebook => ExportFormat::Facebook,
        }
    }
}

/// Report file format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportArg {
    /// Full report as JSON
    Json,

    /// Per-user table as CSV
    Csv,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> ReportFormat {
        match arg {
            ReportArg::Json => ReportFormat::Json,
            ReportArg::Csv => ReportFormat::Csv,
        }
    }
}
