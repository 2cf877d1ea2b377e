//! Display-ready projection of an [`AnalysisResult`].
//!
//! A [`Report`] is what gets printed or written out: the summary line,
//! per-day activity within the analysis period, the per-user table,
//! labelled hour buckets, the top words and the award list.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::{AnalysisResult, DailyCount, UserStats};

/// Headline figures of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub most_active_user: String,
    pub total_messages: usize,
    pub most_positive_user: String,
    /// Day of the first message in file order.
    pub start: NaiveDate,
    /// Day of the last message in file order.
    pub end: NaiveDate,
    /// `"<start> to <end>"`.
    pub period: String,
}

/// Award categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    MostActive,
    MostPositive,
    MostCaring,
    FastestReplier,
    MostDetailed,
    MostExpressive,
}

impl AwardKind {
    pub fn all() -> &'static [AwardKind] {
        &[
            AwardKind::MostActive,
            AwardKind::MostPositive,
            AwardKind::MostCaring,
            AwardKind::FastestReplier,
            AwardKind::MostDetailed,
            AwardKind::MostExpressive,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AwardKind::MostActive => "Most Active",
            AwardKind::MostPositive => "Most Positive",
            AwardKind::MostCaring => "Most Caring",
            AwardKind::FastestReplier => "Fastest Replier",
            AwardKind::MostDetailed => "Most Detailed",
            AwardKind::MostExpressive => "Most Expressive",
        }
    }

    /// Icon used by the CLI.
    pub fn icon(&self) -> &'static str {
        match self {
            AwardKind::MostActive => "💬",
            AwardKind::MostPositive => "😊",
            AwardKind::MostCaring => "❤️",
            AwardKind::FastestReplier => "⏱️",
            AwardKind::MostDetailed => "📝",
            AwardKind::MostExpressive => "😂",
        }
    }
}

impl fmt::Display for AwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A highlight awarded to one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub kind: AwardKind,
    pub title: String,
    pub recipient: String,
}

/// Message count for one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// 0-23.
    pub hour: u32,
    /// 12-hour clock label such as `"12 AM"` or `"3 PM"`.
    pub label: String,
    pub count: usize,
}

/// One row of the per-user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub sender: String,
    pub messages: usize,
    pub first_messages: usize,
    /// Average sentiment rounded to two decimals.
    pub avg_sentiment: f64,
}

/// Sender and message count, for the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserShare {
    pub sender: String,
    pub messages: usize,
}

/// Word and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Everything a front end needs to present an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub awards: Vec<Award>,
    /// Daily counts restricted to the analysis period.
    pub activity: Vec<DailyCount>,
    pub user_distribution: Vec<UserShare>,
    pub active_hours: Vec<HourBucket>,
    pub top_words: Vec<WordCount>,
    pub users: Vec<UserRow>,
}

impl Report {
    /// Projects an analysis result, keeping the `top_words` most frequent words.
    pub fn from_result(result: &AnalysisResult, top_words: usize) -> Self {
        let range = result.date_range;
        let start = range.start.date();
        let end = range.end.date();

        let summary = Summary {
            most_active_user: result.most_active_user.clone(),
            total_messages: result.total_messages,
            most_positive_user: result.most_positive_user.clone(),
            start,
            end,
            period: format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
        };

        let activity = result
            .time_series
            .iter()
            .filter(|day| range.contains_date(day.date))
            .copied()
            .collect();

        let user_distribution = result
            .users
            .iter()
            .map(|u| UserShare {
                sender: u.name.clone(),
                messages: u.message_count,
            })
            .collect();

        let active_hours = result
            .active_hours
            .iter()
            .enumerate()
            .map(|(hour, &count)| {
                let hour = hour as u32;
                HourBucket {
                    hour,
                    label: hour_label(hour),
                    count,
                }
            })
            .collect();

        let top_words = result
            .word_frequency
            .top(top_words)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();

        let users = result
            .users
            .iter()
            .map(|u| UserRow {
                sender: u.name.clone(),
                messages: u.message_count,
                first_messages: result.first_messages_of(&u.name),
                avg_sentiment: round2(u.avg_sentiment),
            })
            .collect();

        Self {
            summary,
            awards: awards(result),
            activity,
            user_distribution,
            active_hours,
            top_words,
            users,
        }
    }

    /// Looks up the recipient of an award, if it was given.
    pub fn award(&self, kind: AwardKind) -> Option<&str> {
        self.awards
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.recipient.as_str())
    }
}

/// 12-hour clock label for an hour of the day.
pub fn hour_label(hour: u32) -> String {
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{display} {period}")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns the first user whose score beats every earlier one.
///
/// `better(candidate, best)` must be a strict comparison so that ties stay
/// with the earlier sender.
fn pick<'a, T: Copy>(
    users: &'a [UserStats],
    score: impl Fn(&UserStats) -> Option<T>,
    better: impl Fn(T, T) -> bool,
) -> Option<&'a UserStats> {
    let mut best: Option<(&UserStats, T)> = None;
    for user in users {
        let Some(value) = score(user) else { continue };
        if best.is_none_or(|(_, current)| better(value, current)) {
            best = Some((user, value));
        }
    }
    best.map(|(user, _)| user)
}

/// Computes the award list, skipping awards without a recipient.
pub fn awards(result: &AnalysisResult) -> Vec<Award> {
    let users = &result.users;
    let name = |user: Option<&UserStats>| user.map(|u| u.name.clone()).unwrap_or_default();

    let caring = pick(users, |u| Some(u.avg_sentiment), |a, b| a > b);
    let fastest = pick(users, |u| u.avg_response_ms, |a, b| a < b);
    let detailed = pick(users, |u| Some(u.avg_chars), |a, b| a > b);
    let expressive = pick(users, |u| Some(u.total_emojis()), |a, b| a > b);

    let recipients = [
        (AwardKind::MostActive, result.most_active_user.clone()),
        (AwardKind::MostPositive, result.most_positive_user.clone()),
        (AwardKind::MostCaring, name(caring)),
        (AwardKind::FastestReplier, name(fastest)),
        (AwardKind::MostDetailed, name(detailed)),
        (AwardKind::MostExpressive, name(expressive)),
    ];

    recipients
        .into_iter()
        .filter(|(_, recipient)| !recipient.is_empty())
        .map(|(kind, recipient)| Award {
            kind,
            title: kind.title().to_string(),
            recipient,
        })
        .collect()
}
