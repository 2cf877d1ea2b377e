//! Word, emoji and sentiment analysis for message text.
//!
//! All scoring here is a fixed bag-of-words heuristic: the stop-word list
//! and the positive/negative keyword lists are closed and must not change,
//! since every statistic downstream is defined in terms of them.
//!
//! # Tokenization
//!
//! Text is lower-cased and split into runs of ASCII letters, digits,
//! underscores and apostrophes. Apostrophes at either end of a run are not
//! part of the token, so `'hello'` yields `hello` while `don't` stays whole.
//! Non-ASCII letters act as separators.
//!
//! ```rust
//! use chatlens::core::text::tokenize;
//!
//! assert_eq!(tokenize("Don't PANIC, it's 'fine'"), vec!["don't", "panic", "it's", "fine"]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use phf::phf_set;
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_']+").unwrap());

/// Words never counted in the word-frequency table.
static STOP_WORDS: phf::Set<&'static str> = phf_set! {
    "he", "to", "it", "is", "of", "in", "for", "and", "but", "okay", "how", "or", "why",
    "where", "what", "the", "a", "an", "that", "this", "was", "were", "are", "am", "i",
    "you", "we", "they", "me", "him", "her", "us", "them", "my", "your", "our", "their",
    "mine", "yours", "ours", "theirs", "will", "so", "i'm", "like", "it's", "not", "now",
    "be", "omitted", "media", "bt", "know", "wat", "have", "cz", "then", "do", "on", "no",
    "too", "if", "ok", "ur", "about", "just", "dont", "kuti",
};

static POSITIVE_WORDS: phf::Set<&'static str> = phf_set! {
    "good", "great", "excellent", "awesome", "wonderful", "happy", "love", "like", "nice",
    "best", "amazing", "fantastic", "perfect", "beautiful", "fun", "joy", "pleasure",
    "smile", "laugh", "success",
};

static NEGATIVE_WORDS: phf::Set<&'static str> = phf_set! {
    "bad", "terrible", "awful", "hate", "dislike", "horrible", "worst", "sad", "angry",
    "upset", "annoying", "problem", "issue", "wrong", "fail", "failure", "disappoint",
    "cry", "mad",
};

/// Returns the lower-cased word tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RUN
        .find_iter(&lower)
        .map(|m| m.as_str().trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Whitespace for trimming lines and counting words: Unicode `White_Space`
/// without NEL (U+0085), plus the byte-order mark (U+FEFF).
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Number of whitespace-separated words in `text`.
///
/// ```rust
/// use chatlens::core::text::count_words;
///
/// assert_eq!(count_words("  hi\u{feff}there  you "), 3);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split(is_space).filter(|word| !word.is_empty()).count()
}

/// Returns `true` if the token is in the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Returns `true` if a token should be counted in word frequencies.
pub fn is_countable_word(token: &str) -> bool {
    token.chars().count() >= 2 && !is_stop_word(token)
}

/// Returns `true` for code points in the recognized emoji blocks.
///
/// Covers Miscellaneous Symbols and Pictographs, Emoticons, Transport and
/// Map Symbols, Miscellaneous Symbols and Dingbats. Variation selectors and
/// joiners are not emoji by themselves.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F600}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}

/// Iterates over emoji code points in `text`, in order.
pub fn emojis(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_emoji(*c))
}

/// Scores a single token: +1 positive, -1 negative, 0 otherwise.
fn keyword_score(token: &str) -> i32 {
    if POSITIVE_WORDS.contains(token) {
        1
    } else if NEGATIVE_WORDS.contains(token) {
        -1
    } else {
        0
    }
}

/// Computes the normalized sentiment of `text`.
///
/// The sum of keyword scores divided by the total token count, so the
/// result lies in `[-1, 1]`. Text without tokens scores 0.
///
/// ```rust
/// use chatlens::core::text::sentiment;
///
/// assert!(sentiment("this is good") > sentiment("this is bad"));
/// assert_eq!(sentiment("see you at noon"), 0.0);
/// assert_eq!(sentiment("🙂"), 0.0);
/// ```
pub fn sentiment(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let score: i32 = tokens.iter().map(|t| keyword_score(t)).sum();
    f64::from(score) / tokens.len() as f64
}

/// Word and emoji frequency tables.
///
/// Absent keys are implicitly zero. Entries keep the order in which keys
/// were first seen, and the table serializes as a plain object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `key` by one.
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), 1));
            }
        }
    }

    /// Sets the count for `key`, appending it if unseen.
    fn set(&mut self, key: String, count: usize) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = count,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
            }
        }
    }

    /// Count for `key`, zero if never seen.
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The `n` most frequent entries, count descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for FrequencyTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = FrequencyTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut table = FrequencyTable::new();
        while let Some((key, count)) = map.next_entry::<String, usize>()? {
            table.set(key, count);
        }
        Ok(table)
    }
}

/// Feeds one message into the global word table, the global emoji table and
/// the sender's own emoji table.
pub fn analyze_text(
    text: &str,
    words: &mut FrequencyTable,
    emoji_counts: &mut FrequencyTable,
    user_emojis: &mut FrequencyTable,
) {
    for token in tokenize(text) {
        if is_countable_word(&token) {
            words.add(&token);
        }
    }

    let mut buf = [0u8; 4];
    for emoji in emojis(text) {
        let key = emoji.encode_utf8(&mut buf);
        emoji_counts.add(key);
        user_emojis.add(key);
    }
}
