//! Text processing utilities for keyword extraction and character-set comparison
//!
//! Jots are routinely written in a mix of Chinese and English, so token
//! boundaries are Unicode categories rather than ASCII word rules: letters,
//! combining marks and numbers make up tokens, everything else separates
//! them. A run of CJK characters with no separators stays one token, and
//! vowel signs or decomposed accents stay attached to their base letter.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Anything that is not a letter, mark or number
static TOKEN_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn token_separator() -> &'static Regex {
    TOKEN_SEPARATOR
        .get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}]+").expect("Invalid token separator pattern"))
}

/// Chinese and English function words dropped from keyword sets
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "的", "是", "在", "了", "和", "与", "或", "a", "the", "is", "are", "to", "and", "or",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Split text into lower-cased letter/mark/number runs, dropping
/// single-character tokens and stop words. Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop_words = get_stop_words();
    let lowered = text.to_lowercase();
    token_separator()
        .split(&lowered)
        .filter(|s| s.chars().count() > 1)
        .filter(|s| !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect()
}

/// Distinct keywords of `text`
pub fn keywords(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Text up to (not including) the first newline
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Set of distinct characters in `text`
pub fn char_set(text: &str) -> HashSet<char> {
    text.chars().collect()
}

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`; `0.0` when both sets are empty
pub fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
