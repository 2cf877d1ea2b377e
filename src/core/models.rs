//! Analysis result data models.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

pub use super::text::FrequencyTable;

/// Per-sender statistics.
///
/// Totals are accumulated during the aggregation pass; the `avg_*` fields
/// are derived once at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Sender name as it appears in the transcript.
    pub name: String,
    pub message_count: usize,
    /// Sum of message lengths in characters.
    pub total_chars: usize,
    /// Sum of whitespace-separated word counts.
    pub total_words: usize,
    /// Emoji usage of this sender.
    pub emojis: FrequencyTable,
    /// Sum of per-message sentiment scores.
    pub sentiment_score: f64,
    /// Number of calendar days on which this sender wrote first.
    pub first_message_count: usize,
    pub avg_chars: f64,
    pub avg_words: f64,
    pub avg_sentiment: f64,
    /// Mean gap between this sender's consecutive messages, in milliseconds.
    ///
    /// `None` when the sender wrote only once.
    pub avg_response_ms: Option<f64>,
}

impl UserStats {
    /// Creates empty statistics for a sender.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_count: 0,
            total_chars: 0,
            total_words: 0,
            emojis: FrequencyTable::new(),
            sentiment_score: 0.0,
            first_message_count: 0,
            avg_chars: 0.0,
            avg_words: 0.0,
            avg_sentiment: 0.0,
            avg_response_ms: None,
        }
    }

    /// Total number of emoji this sender used.
    pub fn total_emojis(&self) -> usize {
        self.emojis.total()
    }

    /// Average self-response latency as a duration, rounded to milliseconds.
    pub fn avg_response_time(&self) -> Option<TimeDelta> {
        self.avg_response_ms
            .and_then(|ms| TimeDelta::try_milliseconds(ms.round() as i64))
    }
}

/// Number of messages sent on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Timestamps of the first and last message in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Returns `true` if `date` falls on or between the start and end days.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start.date() && date <= self.end.date()
    }
}

/// Complete output of the aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-sender statistics in first-seen order.
    pub users: Vec<UserStats>,
    /// Sender with the most messages; the earliest sender wins ties.
    pub most_active_user: String,
    /// Sender with the highest average sentiment; the earliest sender wins ties.
    pub most_positive_user: String,
    pub total_messages: usize,
    /// Messages per day, ascending, never later than the analysis date.
    pub time_series: Vec<DailyCount>,
    /// Messages per hour of day.
    pub active_hours: [usize; 24],
    pub word_frequency: FrequencyTable,
    pub emoji_frequency: FrequencyTable,
    /// First-message-of-day counts for senders with at least one.
    pub first_message_stats: Vec<(String, usize)>,
    pub date_range: DateRange,
}

impl AnalysisResult {
    /// Looks up a sender's statistics by exact name.
    pub fn user(&self, name: &str) -> Option<&UserStats> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Number of distinct senders.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// First-message-of-day count for a sender, zero if none.
    pub fn first_messages_of(&self, name: &str) -> usize {
        self.first_message_stats
            .iter()
            .find(|(sender, _)| sender == name)
            .map_or(0, |(_, count)| *count)
    }
}
