//! # Chatlens
//!
//! A Rust library for analyzing plain-text chat exports: who talks most,
//! when, how positively, with which words and emoji.
//!
//! ## Overview
//!
//! Chatlens reads the text exports of:
//! - **WhatsApp** - `date, time - sender: text` and `[date, time:ss] sender: text`
//! - **Telegram** - `dd.mm.yyyy, time - sender: text`
//! - **Facebook** - `date, time - sender: text`
//!
//! A transcript is parsed into [`Message`]s, folded in one ordered pass into
//! per-user and overall statistics, and projected into a [`Report`](core::Report)
//! with a summary, activity series, top words and awards.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! 1/2/2024, 10:00 - Alice: hello
//! 1/2/2024, 10:05 - Bob: hi there
//! nice to meet you";
//!
//!     let messages = parse_transcript(text, "whatsapp")?;
//!     assert_eq!(messages[1].text, "hi there\nnice to meet you");
//!
//!     let result = analyze(&messages).ok_or(ChatlensError::EmptyResult)?;
//!     assert_eq!(result.most_active_user, "Alice");
//!
//!     let report = Report::from_result(&result, 10);
//!     println!("{}", report.summary.period);
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions
//!
//! [`AnalysisSession`](session::AnalysisSession) adds input validation and
//! keeps the last transcript in a [`SnapshotStore`](snapshot::SnapshotStore):
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::parser::ExportFormat;
//! use chatlens::session::AnalysisSession;
//! use chatlens::snapshot::FileSnapshotStore;
//!
//! let mut session = AnalysisSession::new(FileSnapshotStore::new(".chatlens"));
//! session.ingest_file("chat.txt", ExportFormat::WhatsApp)?;
//! let report = session.analyze()?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportFormat`](parser::ExportFormat), [`TranscriptParser`](parser::TranscriptParser), [`parse_transcript`](parser::parse_transcript)
//! - [`parsing`] - Grammar table and date/time normalization
//! - [`core`] - Text analysis, aggregation, result models, report projection, writers
//! - [`format`] - [`ReportFormat`](format::ReportFormat) and report writing
//! - [`session`] - Validated ingest and repeatable analysis
//! - [`snapshot`] - Snapshot stores
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod session;
pub mod snapshot;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{ExportFormat, TranscriptParser, parse_transcript};

    pub use crate::config::AnalyzerConfig;

    pub use crate::core::{
        AnalysisResult, Award, AwardKind, Report, UserStats, analyze, analyze_as_of,
    };

    pub use crate::format::{ReportFormat, report_to_string, write_report};

    pub use crate::session::AnalysisSession;
    pub use crate::snapshot::{MemorySnapshotStore, SESSION_KEY, SnapshotStore};

    #[cfg(feature = "json-output")]
    pub use crate::snapshot::FileSnapshotStore;
}
