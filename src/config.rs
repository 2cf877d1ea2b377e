//! Configuration for analysis sessions.
//!
//! [`AnalyzerConfig`] carries the input limits and display options used by
//! [`AnalysisSession`](crate::session::AnalysisSession). It has no CLI
//! framework dependency; the binary maps its arguments onto it.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_max_input_bytes(1024 * 1024)
//!     .with_top_words(5)
//!     .with_persist_snapshots(false);
//!
//! assert_eq!(config.top_words, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default upload limit (10 MB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of words in the top-words list.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Limits and options for an analysis session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Largest transcript file accepted, in bytes (default: 10MB)
    pub max_input_bytes: u64,

    /// File extensions accepted as transcripts, lower-case, without dot (default: `txt`)
    pub accepted_extensions: Vec<String>,

    /// Number of entries in the top-words list (default: 10)
    pub top_words: usize,

    /// Save every ingested transcript as the session snapshot (default: true)
    pub persist_snapshots: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            accepted_extensions: vec!["txt".to_string()],
            top_words: DEFAULT_TOP_WORDS,
            persist_snapshots: true,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted file size.
    #[must_use]
    pub fn with_max_input_bytes(mut self, bytes: u64) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Replaces the accepted file extensions.
    #[must_use]
    pub fn with_accepted_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Sets the size of the top-words list.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Enables or disables snapshot persistence.
    #[must_use]
    pub fn with_persist_snapshots(mut self, enabled: bool) -> Self {
        self.persist_snapshots = enabled;
        self
    }

    /// Returns `true` if the file's extension is accepted (case-insensitive).
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .is_some_and(|ext| self.accepted_extensions.iter().any(|a| *a == ext))
    }
}
