//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - Full report as pretty-printed JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - Per-user table, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{write_csv, write_json};
//! use chatlens::core::{Report, analyze};
//! use chatlens::parser::parse_transcript;
//!
//! let messages = parse_transcript("1/2/2024, 10:00 - Alice: hello", "whatsapp")?;
//! let result = analyze(&messages).expect("one message");
//! let report = Report::from_result(&result, 10);
//!
//! write_json(&report, "report.json")?;
//! write_csv(&report, "users.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
