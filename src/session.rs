//! Analysis session: the orchestration layer around parsing and analysis.
//!
//! An [`AnalysisSession`] holds the messages of the most recently ingested
//! transcript, keeps them in a [`SnapshotStore`] so they survive restarts,
//! and produces a [`Report`] on demand.
//!
//! # Example
//!
//! ```rust
//! use chatlens::session::AnalysisSession;
//! use chatlens::snapshot::MemorySnapshotStore;
//!
//! let mut session = AnalysisSession::new(MemorySnapshotStore::new());
//! session.ingest_str("1/2/2024, 10:00 - Alice: hello", "whatsapp")?;
//!
//! let report = session.analyze()?;
//! assert_eq!(report.summary.total_messages, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::core::aggregator::analyze_as_of;
use crate::core::models::AnalysisResult;
use crate::core::report::Report;
use crate::error::{ChatlensError, Result};
use crate::parser::{ExportFormat, TranscriptParser};
use crate::snapshot::{SESSION_KEY, SnapshotStore};

/// Checks a transcript file against the configured extension and size limits.
///
/// Returns the file size in bytes.
pub fn validate_input(path: &Path, config: &AnalyzerConfig) -> Result<u64> {
    if !config.accepts_extension(path) {
        warn!(path = %path.display(), "rejected input: wrong file type");
        return Err(ChatlensError::invalid_input(
            format!(
                "Please provide a text file (.{})",
                config.accepted_extensions.join(", .")
            ),
            Some(path.to_path_buf()),
        ));
    }

    let size = fs::metadata(path)?.len();
    if size > config.max_input_bytes {
        warn!(path = %path.display(), size, limit = config.max_input_bytes, "rejected input: too large");
        return Err(ChatlensError::invalid_input(
            format!(
                "File size {} bytes exceeds the {} byte limit",
                size, config.max_input_bytes
            ),
            Some(path.to_path_buf()),
        ));
    }

    Ok(size)
}

/// Holds the current transcript and analyzes it.
///
/// Failed operations leave the session as it was, so they can simply be
/// retried.
#[derive(Debug)]
pub struct AnalysisSession<S: SnapshotStore> {
    store: S,
    config: AnalyzerConfig,
    messages: Vec<Message>,
}

impl<S: SnapshotStore> AnalysisSession<S> {
    /// Creates an empty session with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, AnalyzerConfig::default())
    }

    pub fn with_config(store: S, config: AnalyzerConfig) -> Self {
        Self {
            store,
            config,
            messages: Vec::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Messages of the current transcript, in file order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Loads the persisted snapshot into the session.
    ///
    /// Returns `true` if a snapshot was found. An unreadable snapshot is an
    /// error and leaves the session unchanged.
    pub fn restore(&mut self) -> Result<bool> {
        match self.store.load(SESSION_KEY) {
            Ok(Some(messages)) => {
                info!(count = messages.len(), "restored snapshot");
                self.messages = messages;
                Ok(true)
            }
            Ok(None) => {
                debug!("no snapshot to restore");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "could not restore snapshot");
                Err(e)
            }
        }
    }

    /// Validates, reads and parses a transcript file, replacing the
    /// current messages.
    ///
    /// Returns the number of parsed messages.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>, format: ExportFormat) -> Result<usize> {
        let path = path.as_ref();
        let size = validate_input(path, &self.config)?;

        // Invalid UTF-8 is replaced rather than rejected
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);

        info!(path = %path.display(), size, %format, "ingesting transcript");
        self.replace(TranscriptParser::new(format).parse_str(&text))
    }

    /// Parses transcript text, replacing the current messages.
    ///
    /// Fails with [`ChatlensError::UnsupportedFormat`] for an unknown tag.
    pub fn ingest_str(&mut self, text: &str, format_tag: &str) -> Result<usize> {
        let format: ExportFormat = format_tag.parse()?;
        info!(bytes = text.len(), %format, "ingesting transcript text");
        self.replace(TranscriptParser::new(format).parse_str(text))
    }

    fn replace(&mut self, messages: Vec<Message>) -> Result<usize> {
        if self.config.persist_snapshots {
            self.store.save(SESSION_KEY, &messages)?;
        }
        let count = messages.len();
        self.messages = messages;
        info!(count, "transcript loaded");
        Ok(count)
    }

    /// Runs the analysis as of today.
    pub fn result(&self) -> Result<AnalysisResult> {
        self.result_as_of(Local::now().date_naive())
    }

    /// Runs the analysis, treating `today` as the current date.
    pub fn result_as_of(&self, today: NaiveDate) -> Result<AnalysisResult> {
        analyze_as_of(&self.messages, today).ok_or(ChatlensError::EmptyResult)
    }

    /// Analyzes the current messages and projects the report.
    ///
    /// Fails with [`ChatlensError::EmptyResult`] when no messages are loaded.
    pub fn analyze(&self) -> Result<Report> {
        self.analyze_as_of(Local::now().date_naive())
    }

    pub fn analyze_as_of(&self, today: NaiveDate) -> Result<Report> {
        let result = self.result_as_of(today)?;
        Ok(Report::from_result(&result, self.config.top_words))
    }

    /// Discards the current messages and the persisted snapshot.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear(SESSION_KEY)?;
        self.messages.clear();
        info!("session reset");
        Ok(())
    }
}
