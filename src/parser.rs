//! Transcript parsing: raw export text to an ordered list of messages.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::{ExportFormat, TranscriptParser};
//!
//! let text = "1/2/2024, 10:00 - Alice: hello\n\
//!             1/2/2024, 10:05 - Bob: hi there\n\
//!             nice to meet you";
//!
//! let messages = TranscriptParser::new(ExportFormat::WhatsApp).parse_str(text);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].text, "hi there\nnice to meet you");
//! ```
//!
//! # Line Classification
//!
//! Every non-blank line is either a **message start** (it matches one of the
//! format's line patterns) or a **continuation** of the previous message.
//! Continuation lines that appear before the first message are dropped.
//! Nothing is ever rejected as a parse failure.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Message;
use crate::core::text::is_space;
use crate::error::ChatlensError;
use crate::parsing::datetime::normalize;
use crate::parsing::grammar::{self, Grammar};

/// Supported chat export formats.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("telegram").unwrap();
/// assert_eq!(format, ExportFormat::Telegram);
///
/// // Aliases are supported
/// let format = ExportFormat::from_str("wa").unwrap();
/// assert_eq!(format, ExportFormat::WhatsApp);
///
/// assert!(ExportFormat::from_str("signal").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// WhatsApp TXT exports (Android dash lines and iOS bracketed lines)
    #[serde(alias = "wa")]
    WhatsApp,

    /// Telegram text exports with dot-separated dates
    #[serde(alias = "tg")]
    Telegram,

    /// Facebook Messenger text exports
    #[serde(alias = "fb")]
    Facebook,
}

impl ExportFormat {
    /// Returns the line grammar for this format.
    pub fn grammar(&self) -> &'static Grammar {
        match self {
            ExportFormat::WhatsApp => &grammar::WHATSAPP,
            ExportFormat::Telegram => &grammar::TELEGRAM,
            ExportFormat::Facebook => &grammar::FACEBOOK,
        }
    }

    /// Returns the canonical lower-case tag.
    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::WhatsApp => "whatsapp",
            ExportFormat::Telegram => "telegram",
            ExportFormat::Facebook => "facebook",
        }
    }

    /// Returns all format names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["whatsapp", "wa", "telegram", "tg", "facebook", "fb"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::WhatsApp,
            ExportFormat::Telegram,
            ExportFormat::Facebook,
        ]
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::WhatsApp => write!(f, "WhatsApp"),
            ExportFormat::Telegram => write!(f, "Telegram"),
            ExportFormat::Facebook => write!(f, "Facebook"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(ExportFormat::WhatsApp),
            "telegram" | "tg" => Ok(ExportFormat::Telegram),
            "facebook" | "fb" => Ok(ExportFormat::Facebook),
            _ => Err(ChatlensError::unsupported_format(s)),
        }
    }
}

/// Line parser for one export format.
///
/// Holds the compiled line patterns of the format's [`Grammar`]; build it
/// once and reuse it for many transcripts.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    format: ExportFormat,
    patterns: Vec<Regex>,
}

impl TranscriptParser {
    /// Creates a parser for the given export format.
    pub fn new(format: ExportFormat) -> Self {
        let patterns = format
            .grammar()
            .patterns
            .iter()
            .map(|p| Regex::new(p.regex).unwrap())
            .collect();
        Self { format, patterns }
    }

    /// Returns the export format this parser handles.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Parses transcript text into messages, in file order.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let grammar = self.format.grammar();
        let mut messages: Vec<Message> = Vec::new();
        let mut dropped = 0usize;

        for raw in content.split('\n') {
            let line = trim_line(raw);
            if line.is_empty() {
                continue;
            }

            match self.message_start(line, grammar) {
                Some(msg) => messages.push(msg),
                None => match messages.last_mut() {
                    Some(last) => last.push_line(line),
                    None => dropped += 1,
                },
            }
        }

        debug!(
            format = self.format.tag(),
            messages = messages.len(),
            dropped,
            "parsed transcript"
        );
        messages
    }

    /// Tries each pattern in priority order; the first match wins.
    fn message_start(&self, line: &str, grammar: &Grammar) -> Option<Message> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(line)?;
            let date = caps.get(1)?.as_str();
            let time = caps.get(2)?.as_str();
            let sender = caps.get(3)?.as_str().trim_matches(is_space);
            let text = caps.get(4)?.as_str().trim_matches(is_space);
            let timestamp = normalize(date, time, grammar)?;
            Some(Message::new(sender, text, timestamp))
        })
    }
}

/// Trims surrounding whitespace, byte-order marks included.
fn trim_line(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Parses a transcript given a format tag such as `"whatsapp"`.
///
/// # Errors
///
/// Returns [`ChatlensError::UnsupportedFormat`] if the tag is not recognized.
/// A transcript with no recognized lines is not an error; it yields an empty
/// vector.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::parse_transcript;
///
/// let messages = parse_transcript("12.03.2024, 09:00 - Ann: morning", "telegram")?;
/// assert_eq!(messages.len(), 1);
///
/// assert!(parse_transcript("anything", "signal").is_err());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse_transcript(text: &str, format_tag: &str) -> Result<Vec<Message>, ChatlensError> {
    let format: ExportFormat = format_tag.parse()?;
    Ok(TranscriptParser::new(format).parse_str(text))
}
