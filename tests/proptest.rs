//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatlens::core::text::{sentiment, tokenize};
use chatlens::core::{Report, analyze_as_of};
use chatlens::parser::parse_transcript;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::collections::HashSet;

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie Brown", "Иван", "User 123"];

const BODIES: &[&str] = &[
    "hello",
    "good morning",
    "this is bad",
    "pizza tonight?",
    "meet at 10:30",
    "🎉🔥 party",
    "Привет мир",
    "ok",
    "love it, great stuff",
];

const CONTINUATIONS: &[&str] = &["and one more thing", "🙂", "sure"];

/// One generated message: sender, body, day offset, hour, minute and an
/// optional continuation line.
type Line = (usize, usize, i64, u32, u32, Option<usize>);

fn arb_line() -> impl Strategy<Value = Line> {
    (
        0..SENDERS.len(),
        0..BODIES.len(),
        0i64..90,
        0u32..24,
        0u32..60,
        prop::option::weighted(0.2, 0..CONTINUATIONS.len()),
    )
}

fn arb_lines(max_len: usize) -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

fn timestamp(line: &Line) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (base + TimeDelta::days(line.2))
        .and_hms_opt(line.3, line.4, 0)
        .unwrap()
}

/// Renders lines as a Telegram text export.
fn render(lines: &[Line]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(&format!(
            "{} - {}: {}\n",
            timestamp(line).format("%d.%m.%Y, %H:%M"),
            SENDERS[line.0],
            BODIES[line.1]
        ));
        if let Some(c) = line.5 {
            text.push_str(CONTINUATIONS[c]);
            text.push('\n');
        }
    }
    text
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Every header line yields exactly one message
    #[test]
    fn parse_count_matches_headers(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        prop_assert_eq!(messages.len(), lines.len());
    }

    /// Senders and timestamps survive parsing, continuations attach
    #[test]
    fn parse_preserves_fields(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        for (message, line) in messages.iter().zip(&lines) {
            prop_assert_eq!(message.sender.as_str(), SENDERS[line.0]);
            prop_assert_eq!(message.timestamp, timestamp(line));
            let expected = match line.5 {
                Some(c) => format!("{}\n{}", BODIES[line.1], CONTINUATIONS[c]),
                None => BODIES[line.1].to_string(),
            };
            prop_assert_eq!(&message.text, &expected);
        }
    }

    /// Parsing arbitrary text never panics
    #[test]
    fn parse_arbitrary_text_never_panics(text in any::<String>()) {
        for tag in ["whatsapp", "telegram", "facebook"] {
            let _ = parse_transcript(&text, tag).unwrap();
        }
    }

    /// WhatsApp grammar does not pick up Telegram lines
    #[test]
    fn telegram_lines_are_not_whatsapp(lines in arb_lines(20)) {
        let messages = parse_transcript(&render(&lines), "whatsapp").unwrap();
        prop_assert!(messages.is_empty());
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Per-user counts add up to the total
    #[test]
    fn user_counts_sum_to_total(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        if let Some(result) = analyze_as_of(&messages, today()) {
            let sum: usize = result.users.iter().map(|u| u.message_count).sum();
            prop_assert_eq!(sum, result.total_messages);
            prop_assert_eq!(result.active_hours.iter().sum::<usize>(), result.total_messages);
        } else {
            prop_assert!(lines.is_empty());
        }
    }

    /// Exactly one first message is credited per distinct day
    #[test]
    fn first_messages_one_per_day(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        prop_assume!(!messages.is_empty());

        let result = analyze_as_of(&messages, today()).unwrap();
        let days: HashSet<NaiveDate> = messages.iter().map(|m| m.date()).collect();
        let credited: usize = result.first_message_stats.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(credited, days.len());
    }

    /// The daily series never goes past today and never over-counts
    #[test]
    fn time_series_bounded_by_today(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        prop_assume!(!messages.is_empty());

        let result = analyze_as_of(&messages, today()).unwrap();
        prop_assert!(result.time_series.iter().all(|d| d.date <= today()));
        prop_assert!(result.time_series.windows(2).all(|w| w[0].date < w[1].date));
        let series_total: usize = result.time_series.iter().map(|d| d.count).sum();
        prop_assert!(series_total <= result.total_messages);
    }

    /// The most active user has the highest message count
    #[test]
    fn most_active_has_max_count(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        prop_assume!(!messages.is_empty());

        let result = analyze_as_of(&messages, today()).unwrap();
        let max = result.users.iter().map(|u| u.message_count).max().unwrap();
        let leader = result.user(&result.most_active_user).unwrap();
        prop_assert_eq!(leader.message_count, max);
    }

    /// Report activity stays inside the analysis period
    #[test]
    fn report_activity_within_period(lines in arb_lines(40)) {
        let messages = parse_transcript(&render(&lines), "telegram").unwrap();
        prop_assume!(!messages.is_empty());

        let result = analyze_as_of(&messages, today()).unwrap();
        let report = Report::from_result(&result, 5);
        prop_assert!(report.top_words.len() <= 5);
        prop_assert!(report.activity.iter().all(|d|
            d.date >= report.summary.start && d.date <= report.summary.end
        ));
    }

    // ============================================
    // TEXT PROPERTIES
    // ============================================

    /// Sentiment is always within [-1, 1]
    #[test]
    fn sentiment_is_bounded(text in any::<String>()) {
        let score = sentiment(&text);
        prop_assert!((-1.0..=1.0).contains(&score));
    }

    /// Tokens are lower-case and never start or end with an apostrophe
    #[test]
    fn tokens_are_normalized(text in any::<String>()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.starts_with('\'') && !token.ends_with('\''));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }
}
