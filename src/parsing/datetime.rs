//! Date/time normalization for transcript timestamps.
//!
//! Converts the raw date and time tokens captured from a message line into a
//! [`NaiveDateTime`] (local wall-clock time, no offset).
//!
//! Calendar overflow rolls over instead of failing: a month of 13 becomes
//! January of the following year and day 32 spills into the next month,
//! the same arithmetic a proleptic calendar applies when components are added
//! one at a time. A line that matched a message pattern therefore always
//! yields a timestamp.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::grammar::{DayOrder, Grammar};

/// Resolved numeric components of a date token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i64,
    /// 1-based month, may exceed 12 before rollover.
    pub month: i64,
    pub day: i64,
}

/// Splits a date token and resolves day/month order and two-digit years.
///
/// Returns `None` if the token does not have three numeric components.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::datetime::split_date;
/// use chatlens::parsing::grammar::WHATSAPP;
///
/// let parts = split_date("1/1/23", &WHATSAPP).unwrap();
/// assert_eq!((parts.year, parts.month, parts.day), (2023, 1, 1));
/// ```
pub fn split_date(date: &str, grammar: &Grammar) -> Option<DateParts> {
    let separator = grammar
        .separators
        .iter()
        .copied()
        .find(|sep| date.contains(*sep))?;

    let mut parts = date.split(separator).map(|p| p.trim().parse::<i64>());
    let first = parts.next()?.ok()?;
    let second = parts.next()?.ok()?;
    let mut year = parts.next()?.ok()?;

    let (day, month) = match grammar.day_order {
        DayOrder::FirstAboveOneIsDay if first > 1 => (first, second),
        DayOrder::FirstAboveOneIsDay => (second, first),
        DayOrder::DayFirst => (first, second),
    };

    if year < 100 {
        year += 2000;
    }

    Some(DateParts { year, month, day })
}

/// Splits a time token into hours, minutes and seconds (default 0).
pub fn split_time(time: &str) -> Option<(i64, i64, i64)> {
    let mut parts = time.split(':').map(|p| p.trim().parse::<i64>());
    let hours = parts.next()?.ok()?;
    let minutes = parts.next()?.ok()?;
    let seconds = match parts.next() {
        Some(s) => s.ok()?,
        None => 0,
    };
    Some((hours, minutes, seconds))
}

/// Normalizes a date token and time token into a local instant.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::datetime::normalize;
/// use chatlens::parsing::grammar::TELEGRAM;
/// use chrono::{Datelike, Timelike};
///
/// let ts = normalize("05.03.2024", "18:07", &TELEGRAM).unwrap();
/// assert_eq!((ts.day(), ts.month(), ts.year()), (5, 3, 2024));
/// assert_eq!((ts.hour(), ts.minute(), ts.second()), (18, 7, 0));
/// ```
pub fn normalize(date: &str, time: &str, grammar: &Grammar) -> Option<NaiveDateTime> {
    let parts = split_date(date, grammar)?;
    let (hours, minutes, seconds) = split_time(time)?;
    compose(parts, hours, minutes, seconds)
}

/// Builds an instant from possibly out-of-range components, rolling over
/// month, day and time overflow.
fn compose(parts: DateParts, hours: i64, minutes: i64, seconds: i64) -> Option<NaiveDateTime> {
    let month0 = parts.month - 1;
    let year = i32::try_from(parts.year + month0.div_euclid(12)).ok()?;
    let month = u32::try_from(month0.rem_euclid(12) + 1).ok()?;

    let offset = TimeDelta::try_days(parts.day - 1)?
        .checked_add(&TimeDelta::try_hours(hours)?)?
        .checked_add(&TimeDelta::try_minutes(minutes)?)?
        .checked_add(&TimeDelta::try_seconds(seconds)?)?;

    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(offset)
}
