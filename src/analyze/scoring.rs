//! Keyword/heuristic scoring of a single post.
//!
//! Four independent signals, summed:
//! - topic match   : any crypto/finance term in the lowercased text  (+5)
//! - meme match    : any meme-adjacent word in the lowercased text   (+3)
//! - symbol density: pictographs in the original text, capped at 3   (+0..3)
//! - emphasis      : an ALL-CAPS token longer than 2 chars           (+2)
//!
//! A post is a candidate once the sum reaches [`DECISION_THRESHOLD`].

use serde::Serialize;

/// Score at (or above) which a post triggers asset creation.
pub const DECISION_THRESHOLD: u32 = 5;

pub const TOPIC_WEIGHT: u32 = 5;
pub const MEME_WEIGHT: u32 = 3;
pub const EMPHASIS_WEIGHT: u32 = 2;
pub const SYMBOL_CAP: usize = 3;

/// Matched as substrings, so "eth" also hits "ethereum".
pub const TOPIC_TERMS: &[&str] = &[
    "bitcoin",
    "btc",
    "ethereum",
    "eth",
    "crypto",
    "cryptocurrency",
    "blockchain",
    "coin",
    "token",
    "doge",
    "dogecoin",
    "hodl",
    "moon",
    "diamond",
    "hands",
    "ape",
    "defi",
    "web3",
    "nft",
];

pub const MEME_TERMS: &[&str] = &[
    "dog", "cat", "moon", "rocket", "fire", "diamond", "golden", "magic", "super", "mega",
    "ultra", "crazy",
];

/// Emoji / pictograph blocks counted as symbols (inclusive ranges).
const SYMBOL_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // misc symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{26A1}', '\u{27BF}'),   // dingbats (from ⚡)
];

/// Outcome of [`score`]. No identity; log it and drop it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub decision: bool,
    pub score: u32,
    pub topic_related: bool,
    pub meme_potential: bool,
    /// Uncapped; only `min(symbol_count, 3)` enters the score.
    pub symbol_count: usize,
    pub emphasis: bool,
}

pub fn is_symbol(c: char) -> bool {
    SYMBOL_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub fn count_symbols(text: &str) -> usize {
    text.chars().filter(|&c| is_symbol(c)).count()
}

/// True for tokens like "HUGE" or "MOON!": at least one cased char, none lowercase.
fn is_shouted(token: &str) -> bool {
    token.chars().count() > 2
        && token.chars().any(char::is_uppercase)
        && !token.chars().any(char::is_lowercase)
}

pub fn has_emphasis(text: &str) -> bool {
    text.split_whitespace().any(is_shouted)
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

/// Score one post. Pure; empty or whitespace-only text yields the default (0, no).
pub fn score(text: &str) -> ScoreResult {
    let lower = text.to_lowercase();

    let topic_related = contains_any(&lower, TOPIC_TERMS);
    let meme_potential = contains_any(&lower, MEME_TERMS);
    let symbol_count = count_symbols(text);
    let emphasis = has_emphasis(text);

    let mut total = 0u32;
    if topic_related {
        total += TOPIC_WEIGHT;
    }
    if meme_potential {
        total += MEME_WEIGHT;
    }
    total += symbol_count.min(SYMBOL_CAP) as u32;
    if emphasis {
        total += EMPHASIS_WEIGHT;
    }

    ScoreResult {
        decision: total >= DECISION_THRESHOLD,
        score: total,
        topic_related,
        meme_potential,
        symbol_count,
        emphasis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_ranges_cover_rocket_and_bolt() {
        assert!(is_symbol('🚀'));
        assert!(is_symbol('⚡'));
        assert!(is_symbol('😀'));
        assert!(!is_symbol('a'));
        assert!(!is_symbol('€'));
    }

    #[test]
    fn shouting_needs_three_chars_and_no_lowercase() {
        assert!(is_shouted("HUGE"));
        assert!(is_shouted("MOON!"));
        assert!(!is_shouted("TO"));
        assert!(!is_shouted("Huge"));
        assert!(!is_shouted("123"));
    }

    #[test]
    fn symbols_cap_at_three_but_count_is_reported_raw() {
        let r = score("🔥🔥🔥🔥🔥");
        assert_eq!(r.symbol_count, 5);
        // "fire" is not in the text; only the capped symbol contribution applies
        assert_eq!(r.score, 3);
        assert!(!r.decision);
    }
}
