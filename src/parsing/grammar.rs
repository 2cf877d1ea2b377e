//! Line grammars for every supported export format.
//!
//! Each export format is described purely as data: the line patterns it
//! accepts (tried in order, first match wins), the separators its date
//! token may use, and the rule that decides which date component is the day.
//! Supporting a new export is a matter of adding a [`Grammar`] here; the
//! parser and the date normalizer never branch on the format itself.

/// Rule for deciding which component of a date token is the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOrder {
    /// The first component is the day if it is greater than 1, otherwise the
    /// second component is the day and the first is the month.
    ///
    /// This is a lossy heuristic: `03/04/2024` reads as 3 April while
    /// `1/4/2024` reads as 4 January.
    FirstAboveOneIsDay,
    /// Always `day`, `month`, `year`.
    DayFirst,
}

/// A single message-start line pattern.
///
/// Every pattern captures exactly four groups: date token, time token,
/// sender token and message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePattern {
    /// Short identifier used in logs and tests.
    pub name: &'static str,
    /// Regex source, matched against a trimmed line.
    pub regex: &'static str,
}

/// Everything needed to parse one export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Candidate patterns in priority order.
    pub patterns: &'static [LinePattern],
    /// Date separators, checked in order against the date token.
    pub separators: &'static [char],
    /// Day/month disambiguation rule.
    pub day_order: DayOrder,
}

// [1/15/24, 10:30:45] Sender: Message
pub const BRACKETED_SECONDS: LinePattern = LinePattern {
    name: "bracketed-seconds",
    regex: r"^\[([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}),? ([0-9]{1,2}:[0-9]{2}:[0-9]{2})\] ([^:]+): ([^\r\x{2028}\x{2029}]+)$",
};

// 1/15/24, 10:30 - Sender: Message
pub const SLASH_DASH: LinePattern = LinePattern {
    name: "slash-dash",
    regex: r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}),? ([0-9]{1,2}:[0-9]{2}) - ([^:]+): ([^\r\x{2028}\x{2029}]+)$",
};

// 15.01.24, 10:30 - Sender: Message
pub const DOT_DASH: LinePattern = LinePattern {
    name: "dot-dash",
    regex: r"^([0-9]{1,2}\.[0-9]{1,2}\.[0-9]{2,4}),? ([0-9]{1,2}:[0-9]{2}) - ([^:]+): ([^\r\x{2028}\x{2029}]+)$",
};

/// WhatsApp: bracketed iOS lines with seconds, then Android dash lines.
pub const WHATSAPP: Grammar = Grammar {
    patterns: &[BRACKETED_SECONDS, SLASH_DASH],
    separators: &['/', '-'],
    day_order: DayOrder::FirstAboveOneIsDay,
};

/// Telegram text exports: dot-separated, always day first.
pub const TELEGRAM: Grammar = Grammar {
    patterns: &[DOT_DASH],
    separators: &['.'],
    day_order: DayOrder::DayFirst,
};

/// Facebook Messenger text exports share the Android WhatsApp line shape.
pub const FACEBOOK: Grammar = Grammar {
    patterns: &[SLASH_DASH],
    separators: &['/'],
    day_order: DayOrder::FirstAboveOneIsDay,
};
