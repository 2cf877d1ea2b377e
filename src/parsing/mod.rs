//! Shared parsing building blocks.
//!
//! - [`grammar`] - Per-format line patterns, date separators and day/month rules
//! - [`datetime`] - Date/time token normalization

pub mod datetime;
pub mod grammar;

pub use datetime::normalize;
pub use grammar::{DayOrder, Grammar, LinePattern};
