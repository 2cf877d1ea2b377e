//! Single-pass aggregation of parsed messages into an [`AnalysisResult`].
//!
//! The pass is strictly ordered: first-message-of-day credit, response
//! latency and every tie-break depend on the order messages were parsed in,
//! so messages are consumed one at a time and never reordered.
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::aggregator::analyze;
//! use chatlens::parser::parse_transcript;
//!
//! let text = "1/2/2024, 10:00 - Alice: hello\n\
//!             1/2/2024, 10:05 - Bob: hi there\n\
//!             nice to meet you";
//! let messages = parse_transcript(text, "whatsapp").unwrap();
//! let result = analyze(&messages).unwrap();
//!
//! assert_eq!(result.total_messages, 2);
//! assert_eq!(result.most_active_user, "Alice");
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::models::{AnalysisResult, DailyCount, DateRange, FrequencyTable, UserStats};
use super::text::{analyze_text, count_words, sentiment};
use crate::Message;

/// Running state for one sender.
#[derive(Debug)]
struct SenderState {
    stats: UserStats,
    last_seen: Option<NaiveDateTime>,
    latency_sum_ms: i64,
    latency_samples: usize,
}

impl SenderState {
    fn new(name: &str) -> Self {
        Self {
            stats: UserStats::new(name),
            last_seen: None,
            latency_sum_ms: 0,
            latency_samples: 0,
        }
    }

    fn finish(mut self) -> UserStats {
        let count = self.stats.message_count as f64;
        if self.stats.message_count > 0 {
            self.stats.avg_chars = self.stats.total_chars as f64 / count;
            self.stats.avg_words = self.stats.total_words as f64 / count;
            self.stats.avg_sentiment = self.stats.sentiment_score / count;
        }
        if self.latency_samples > 0 {
            self.stats.avg_response_ms =
                Some(self.latency_sum_ms as f64 / self.latency_samples as f64);
        }
        self.stats
    }
}

/// Accumulates statistics over an ordered stream of messages.
///
/// Feed messages with [`push`](Self::push) in file order, then call
/// [`finish`](Self::finish) once.
#[derive(Debug, Default)]
pub struct Aggregator {
    senders: Vec<SenderState>,
    index: HashMap<String, usize>,
    credited_days: HashSet<NaiveDate>,
    active_hours: [usize; 24],
    daily: BTreeMap<NaiveDate, usize>,
    words: FrequencyTable,
    emojis: FrequencyTable,
    first: Option<NaiveDateTime>,
    last: Option<NaiveDateTime>,
    total: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages consumed so far.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn sender_slot(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.senders.len();
        self.senders.push(SenderState::new(name));
        self.index.insert(name.to_owned(), idx);
        idx
    }

    /// Consumes one message.
    pub fn push(&mut self, message: &Message) {
        let timestamp = message.timestamp;
        let day = message.date();
        let idx = self.sender_slot(&message.sender);

        {
            let state = &mut self.senders[idx];
            let stats = &mut state.stats;
            stats.message_count += 1;
            // UTF-16 code units, so an astral emoji counts twice
            stats.total_chars += message.text.encode_utf16().count();
            stats.total_words += count_words(&message.text);

            if let Some(previous) = state.last_seen {
                state.latency_sum_ms += (timestamp - previous).num_milliseconds();
                state.latency_samples += 1;
            }
            state.last_seen = Some(timestamp);
        }

        if self.credited_days.insert(day) {
            self.senders[idx].stats.first_message_count += 1;
        }

        self.active_hours[message.hour() as usize] += 1;
        *self.daily.entry(day).or_insert(0) += 1;

        let state = &mut self.senders[idx];
        analyze_text(
            &message.text,
            &mut self.words,
            &mut self.emojis,
            &mut state.stats.emojis,
        );
        state.stats.sentiment_score += sentiment(&message.text);

        self.first.get_or_insert(timestamp);
        self.last = Some(timestamp);
        self.total += 1;
    }

    /// Derives averages, leaders and the daily series.
    ///
    /// Days after `today` are left out of the time series. Returns `None` if
    /// no message was pushed.
    pub fn finish(self, today: NaiveDate) -> Option<AnalysisResult> {
        let start = self.first?;
        let end = self.last?;

        let users: Vec<UserStats> = self.senders.into_iter().map(SenderState::finish).collect();

        let mut most_active: Option<&UserStats> = None;
        for user in &users {
            if most_active.is_none_or(|best| user.message_count > best.message_count) {
                most_active = Some(user);
            }
        }

        let mut most_positive: Option<&UserStats> = None;
        for user in &users {
            if most_positive.is_none_or(|best| user.avg_sentiment > best.avg_sentiment) {
                most_positive = Some(user);
            }
        }

        let most_active_user = most_active.map(|u| u.name.clone()).unwrap_or_default();
        let most_positive_user = most_positive.map(|u| u.name.clone()).unwrap_or_default();

        let time_series: Vec<DailyCount> = self
            .daily
            .into_iter()
            .filter(|(date, _)| *date <= today)
            .map(|(date, count)| DailyCount { date, count })
            .collect();

        let first_message_stats = users
            .iter()
            .filter(|u| u.first_message_count > 0)
            .map(|u| (u.name.clone(), u.first_message_count))
            .collect();

        debug!(
            messages = self.total,
            senders = users.len(),
            days = time_series.len(),
            "aggregation finished"
        );

        Some(AnalysisResult {
            most_active_user,
            most_positive_user,
            total_messages: self.total,
            time_series,
            active_hours: self.active_hours,
            word_frequency: self.words,
            emoji_frequency: self.emojis,
            first_message_stats,
            date_range: DateRange { start, end },
            users,
        })
    }
}

/// Analyzes messages as of the current local date.
///
/// Returns `None` for an empty slice.
pub fn analyze(messages: &[Message]) -> Option<AnalysisResult> {
    analyze_as_of(messages, Local::now().date_naive())
}

/// Analyzes messages, treating `today` as the current date.
pub fn analyze_as_of(messages: &[Message], today: NaiveDate) -> Option<AnalysisResult> {
    let mut aggregator = Aggregator::new();
    for message in messages {
        aggregator.push(message);
    }
    aggregator.finish(today)
}
