//! Pair scoring
//!
//! Four independent signals are accumulated left to right:
//! keyword overlap, first-line similarity, creation-time proximity and
//! length ratio. The sum is not clamped.

use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};

use super::Signal;
use crate::note::Jot;
use crate::text;

pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const FIRST_LINE_WEIGHT: f64 = 0.3;
pub const TIME_PROXIMITY_BONUS: f64 = 0.2;
pub const LENGTH_WEIGHT: f64 = 0.1;

/// Keyword overlap ratio must exceed this for the keyword label to fire
pub const KEYWORD_LABEL_THRESHOLD: f64 = 0.3;
/// First-line Jaccard similarity must exceed this for the first-line label to fire
pub const FIRST_LINE_LABEL_THRESHOLD: f64 = 0.5;
/// Creation timestamps strictly closer than this earn the proximity bonus
pub const TIME_PROXIMITY_WINDOW_SECS: i64 = 3600;

/// Score of one pair before thresholding
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub score: f64,
    /// Labels that fired, in evaluation order
    pub signals: Vec<Signal>,
}

/// Everything the scorer needs from one jot, computed once per analysis pass
#[derive(Debug, Clone)]
pub(crate) struct JotFeatures {
    keywords: HashSet<String>,
    /// Characters of the lower-cased first line; `None` when that line is empty
    first_line_chars: Option<HashSet<char>>,
    char_len: usize,
    created_at: DateTime<Utc>,
}

impl JotFeatures {
    /// `None` when the lower-cased content is empty; such jots never pair
    pub(crate) fn extract(jot: &Jot) -> Option<Self> {
        let lowered = jot.content.to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let first_line = text::first_line(&lowered);
        let first_line_chars = if first_line.is_empty() {
            None
        } else {
            Some(text::char_set(first_line))
        };

        Some(JotFeatures {
            keywords: text::keywords(&lowered),
            first_line_chars,
            char_len: jot.content.chars().count(),
            created_at: jot.created_at,
        })
    }
}

/// Score two jots. Returns `None` if either has empty content.
///
/// The result does not depend on argument order.
pub fn score_pair(a: &Jot, b: &Jot) -> Option<PairScore> {
    let fa = JotFeatures::extract(a)?;
    let fb = JotFeatures::extract(b)?;
    Some(score_features(&fa, &fb))
}

pub(crate) fn score_features(a: &JotFeatures, b: &JotFeatures) -> PairScore {
    let mut score = 0.0;
    let mut signals = Vec::new();

    let overlap = a.keywords.intersection(&b.keywords).count();
    if overlap > 0 {
        let denom = a.keywords.len().max(b.keywords.len());
        let overlap_score = overlap as f64 / denom as f64;
        score += overlap_score * KEYWORD_WEIGHT;
        if overlap_score > KEYWORD_LABEL_THRESHOLD {
            signals.push(Signal::Keywords);
        }
    }

    if let (Some(ca), Some(cb)) = (&a.first_line_chars, &b.first_line_chars) {
        let similarity = text::jaccard(ca, cb);
        score += similarity * FIRST_LINE_WEIGHT;
        if similarity > FIRST_LINE_LABEL_THRESHOLD {
            signals.push(Signal::FirstLine);
        }
    }

    if (a.created_at - b.created_at).abs() < TimeDelta::seconds(TIME_PROXIMITY_WINDOW_SECS) {
        score += TIME_PROXIMITY_BONUS;
        signals.push(Signal::CreatedClose);
    }

    let shorter = a.char_len.min(b.char_len);
    let longer = a.char_len.max(b.char_len);
    score += shorter as f64 / longer as f64 * LENGTH_WEIGHT;

    PairScore { score, signals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_empty_content_never_scores() {
        let a = Jot::new("").with_created_at(at(0));
        let b = Jot::new("buy milk").with_created_at(at(0));
        assert!(score_pair(&a, &b).is_none());
        assert!(score_pair(&b, &a).is_none());
        assert!(score_pair(&a, &a).is_none());
    }

    #[test]
    fn test_proximity_window_is_exclusive() {
        let a = Jot::new("alpha").with_created_at(at(0));
        let inside = Jot::new("omega").with_created_at(at(3599));
        let edge = Jot::new("omega").with_created_at(at(3600));

        let near = score_pair(&a, &inside).unwrap();
        assert!(near.signals.contains(&Signal::CreatedClose));

        let far = score_pair(&a, &edge).unwrap();
        assert!(!far.signals.contains(&Signal::CreatedClose));
        assert!((near.score - far.score - TIME_PROXIMITY_BONUS).abs() < 1e-12);
    }

    #[test]
    fn test_blank_first_line_skips_first_line_signal() {
        // Both first lines are empty; only the length term can contribute
        let a = Jot::new("\nzzz").with_created_at(at(0));
        let b = Jot::new("\nyyy").with_created_at(at(100_000));
        let scored = score_pair(&a, &b).unwrap();
        assert!(scored.signals.is_empty());
        assert!((scored.score - LENGTH_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn test_length_uses_original_character_count() {
        let a = Jot::new("长文本内容").with_created_at(at(0));
        let b = Jot::new("xy").with_created_at(at(100_000));
        let scored = score_pair(&a, &b).unwrap();
        // 2 chars vs 5 chars, nothing else in common
        assert!((scored.score - 0.1 * 2.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_keyword_label_needs_more_than_thirty_percent() {
        // 1 shared keyword of 4 on the larger side: 0.25, below the label cut
        let a = Jot::new("kiwi mango papaya guava").with_created_at(at(0));
        let b = Jot::new("kiwi").with_created_at(at(100_000));
        let scored = score_pair(&a, &b).unwrap();
        assert!(!scored.signals.contains(&Signal::Keywords));
        assert!(scored.score > 0.1 * KEYWORD_WEIGHT);
    }
}
