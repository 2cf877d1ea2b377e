//! Report output formats.
//!
//! These types do not depend on any CLI framework, so library users can pick
//! a format from a file name or a string and write a [`Report`] with it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{ReportFormat, report_to_string};
//! use chatlens::core::{Report, analyze};
//! use chatlens::parser::parse_transcript;
//!
//! let messages = parse_transcript("1/2/2024, 10:00 - Alice: hello", "whatsapp")?;
//! let report = Report::from_result(&analyze(&messages).unwrap(), 10);
//!
//! // Or use format detection from extension
//! let format = ReportFormat::from_path("report.csv")?;
//! assert_eq!(format, ReportFormat::Csv);
//! let csv = report_to_string(&report, format)?;
//! assert!(csv.starts_with("Sender;Messages"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::Report;
use crate::error::ChatlensError;

/// Output format for analysis reports.
///
/// - [`Json`](ReportFormat::Json) - The whole report, pretty-printed
/// - [`Csv`](ReportFormat::Csv) - Only the per-user table, `;` delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Full report as JSON (default)
    #[default]
    Json,

    /// Per-user table as CSV with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::Csv.extension(), "csv");
    /// assert_eq!(ReportFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Json, ReportFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::ReportFormat;
    ///
    /// let format = ReportFormat::from_path("out/report.JSON").unwrap();
    /// assert_eq!(format, ReportFormat::Json);
    /// assert!(ReportFormat::from_path("report.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatlensError::invalid_input(
                format!(
                    "Unknown report extension '.{}'. Expected one of: {}",
                    ext,
                    ReportFormat::all_names().join(", ")
                ),
                Some(path.to_path_buf()),
            )),
        }
    }

    /// Cargo feature that provides this format's writer.
    fn feature(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json-output",
            ReportFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_report(
    report: &Report,
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a report to a string in the specified format.
#[allow(unused_variables)]
pub fn report_to_string(report: &Report, format: ReportFormat) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: ReportFormat) -> ChatlensError {
    ChatlensError::invalid_input(
        format!(
            "Report format {} requires the '{}' feature to be enabled",
            format,
            format.feature()
        ),
        None,
    )
}
