//! Core analysis logic for chatlens.
//!
//! This module contains:
//! - [`text`] - Tokenization, stop words, emoji and sentiment scoring
//! - [`aggregator`] - The single ordered pass over parsed messages
//! - [`models`] - Per-user and overall statistics
//! - [`report`] - Display projection with awards
//! - [`output`] - Report writers (JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Report, analyze};
//! use chatlens::parser::parse_transcript;
//!
//! let text = "1/2/2024, 10:00 - Alice: what a great day\n\
//!             1/2/2024, 10:05 - Bob: indeed";
//! let messages = parse_transcript(text, "whatsapp").unwrap();
//! let result = analyze(&messages).unwrap();
//! let report = Report::from_result(&result, 10);
//!
//! assert_eq!(report.summary.most_positive_user, "Alice");
//! ```

pub mod aggregator;
pub mod models;
pub mod output;
pub mod report;
pub mod text;

pub use aggregator::{Aggregator, analyze, analyze_as_of};
pub use models::{AnalysisResult, DailyCount, DateRange, FrequencyTable, UserStats};
pub use report::{Award, AwardKind, Report};

// Re-export Message from the crate root
pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
