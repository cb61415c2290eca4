//! Coin name derivation from post text.

use chrono::{Local, NaiveTime, Timelike};
use once_cell::sync::OnceCell;
use regex::Regex;

pub const NAME_SUFFIX: &str = "Coin";
pub const FALLBACK_PREFIX: &str = "ElonCoin";
pub const SYMBOL_LEN: usize = 6;

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "will", "would", "could", "should",
];

fn ascii_words() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").unwrap())
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|s| s.eq_ignore_ascii_case(word))
}

/// Tokens that may become a name, in first-occurrence order.
pub fn candidate_words(text: &str) -> Vec<&str> {
    ascii_words()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .collect()
}

fn capitalize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Same as [`generate_name`] with an explicit clock for the fallback path.
pub fn generate_name_at(text: &str, now: NaiveTime) -> String {
    match candidate_words(text).first() {
        Some(word) => format!("{}{NAME_SUFFIX}", capitalize(word)),
        None => format!("{FALLBACK_PREFIX}{:02}{:02}", now.hour(), now.minute()),
    }
}

/// Derive a coin name. Never empty: symbol-only or non-Latin text falls back to
/// a prefix plus the local `HHMM`.
pub fn generate_name(text: &str) -> String {
    generate_name_at(text, Local::now().time())
}

/// Display ticker: first 6 chars uppercased. Cosmetic; not unique.
pub fn symbol_for(name: &str) -> String {
    name.chars().take(SYMBOL_LEN).collect::<String>().to_uppercase()
}
