//! Near-duplicate detection over a jot collection
//!
//! Every unordered pair is scored with [`score_pair`] and pairs at or above the
//! threshold are returned best first. The pass is a pure function of the input
//! slice and the threshold.

mod scoring;

pub use scoring::{
    score_pair, PairScore, FIRST_LINE_LABEL_THRESHOLD, FIRST_LINE_WEIGHT,
    KEYWORD_LABEL_THRESHOLD, KEYWORD_WEIGHT, LENGTH_WEIGHT, TIME_PROXIMITY_BONUS,
    TIME_PROXIMITY_WINDOW_SECS,
};

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::note::Jot;
use scoring::{score_features, JotFeatures};

/// Separator placed between fired labels in a reason string
pub const REASON_SEPARATOR: &str = "、";

/// Reason used when a pair clears the threshold without any labelled signal
pub const FALLBACK_REASON: &str = "内容相关";

/// A signal that fired strongly enough to be named in the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Keyword overlap ratio above 0.3
    Keywords,
    /// First-line character similarity above 0.5
    FirstLine,
    /// Created less than an hour apart
    CreatedClose,
}

impl Signal {
    /// Human-readable label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Keywords => "关键词相似",
            Signal::FirstLine => "标题相似",
            Signal::CreatedClose => "创建时间接近",
        }
    }

    /// Stable machine identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Keywords => "keywords",
            Signal::FirstLine => "first_line",
            Signal::CreatedClose => "created_close",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Join fired labels, or fall back to the generic reason
pub fn reason_for(signals: &[Signal]) -> String {
    if signals.is_empty() {
        return FALLBACK_REASON.to_string();
    }
    signals
        .iter()
        .map(Signal::label)
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR)
}

/// Two jots that look alike.
///
/// `first` precedes `second` in the input; by convention `first` is the jot
/// that is kept when the pair is merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair<'a> {
    pub first: &'a Jot,
    pub second: &'a Jot,
    pub first_index: usize,
    pub second_index: usize,
    pub score: f64,
    pub signals: Vec<Signal>,
    pub reason: String,
}

/// Similarity analyzer over a borrowed jot slice
pub struct SimilarityAnalyzer<'a> {
    jots: &'a [Jot],
}

impl<'a> SimilarityAnalyzer<'a> {
    pub fn new(jots: &'a [Jot]) -> Self {
        SimilarityAnalyzer { jots }
    }

    /// All pairs scoring at least `threshold`, highest score first.
    ///
    /// Ties keep enumeration order: `(0,1), (0,2), …, (1,2), …`.
    pub fn find_similar_pairs(&self, threshold: f64) -> Vec<SimilarPair<'a>> {
        let start = Instant::now();
        let jots = self.jots;

        let features: Vec<Option<JotFeatures>> = jots.iter().map(JotFeatures::extract).collect();

        let mut evaluated = 0usize;
        let mut pairs = Vec::new();

        for i in 0..jots.len() {
            let Some(fi) = &features[i] else { continue };
            for j in i + 1..jots.len() {
                let Some(fj) = &features[j] else { continue };
                evaluated += 1;

                let PairScore { score, signals } = score_features(fi, fj);
                if score < threshold {
                    continue;
                }

                pairs.push(SimilarPair {
                    first: &jots[i],
                    second: &jots[j],
                    first_index: i,
                    second_index: j,
                    score,
                    reason: reason_for(&signals),
                    signals,
                });
            }
        }

        // sort_by is stable, which gives the documented tie order
        pairs.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            jots = jots.len(),
            evaluated,
            kept = pairs.len(),
            threshold,
            "find_similar_pairs"
        );
        crate::trace_time!(start, "find_similar_pairs");

        pairs
    }

    /// The single best pair, if any clears `threshold`
    pub fn best_pair(&self, threshold: f64) -> Option<SimilarPair<'a>> {
        self.find_similar_pairs(threshold).into_iter().next()
    }
}

/// Find all pairs of jots scoring at least `threshold`, highest score first
pub fn find_similar_pairs(jots: &[Jot], threshold: f64) -> Vec<SimilarPair<'_>> {
    SimilarityAnalyzer::new(jots).find_similar_pairs(threshold)
}
