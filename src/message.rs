//! The message type produced by transcript parsing.
//!
//! A [`Message`] is one chat entry reconstructed from an export: who sent it,
//! when (as local wall-clock time, exactly as written in the export), and
//! the text. Multi-line messages carry their continuation lines joined with
//! `\n`.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let msg = Message::new("Alice", "hello", ts);
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour(), 10);
//! ```
//!
//! ## Serialization
//!
//! Timestamps serialize as ISO 8601 local date-times without an offset, so a
//! snapshot restores the exact same instant:
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(10, 5, 30).unwrap();
//! let msg = Message::new("Bob", "hi there", ts);
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("2024-02-01T10:05:30"));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single chat message reconstructed from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local wall-clock time the message was sent |
/// | `sender` | `String` | Trimmed sender name, case- and whitespace-sensitive |
/// | `text` | `String` | Message body, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Local wall-clock time of the message.
    pub timestamp: NaiveDateTime,

    /// Display name of the author.
    pub sender: String,

    /// Text content. May contain newlines for multi-line messages.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(sender: impl Into<String>, text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar day the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day (0-23) the message was sent in.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Appends a continuation line to the message text.
    pub fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}
