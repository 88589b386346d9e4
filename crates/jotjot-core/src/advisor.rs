//! Debounced merge suggestions
//!
//! Re-running the analyzer on every keystroke is wasteful, so the advisor
//! only re-analyses when the number of jots changes. Suggestions the user
//! dismissed are not offered again.

use std::collections::HashSet;

use crate::merge::{suggest_merge, MergeSuggestion, PairKey, DEFAULT_PREVIEW_LENGTH};
use crate::note::Jot;

#[derive(Debug, Clone)]
pub struct MergeAdvisor {
    threshold: f64,
    preview_length: usize,
    last_len: Option<usize>,
    current: Option<MergeSuggestion>,
    dismissed: HashSet<PairKey>,
}

impl MergeAdvisor {
    pub fn new(threshold: f64) -> Self {
        MergeAdvisor {
            threshold,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            last_len: None,
            current: None,
            dismissed: HashSet::new(),
        }
    }

    pub fn with_preview_length(mut self, preview_length: usize) -> Self {
        self.preview_length = preview_length;
        self
    }

    /// Seed pairs dismissed in an earlier session
    pub fn with_dismissed(mut self, pairs: impl IntoIterator<Item = PairKey>) -> Self {
        self.dismissed.extend(pairs);
        self
    }

    /// Observe the collection. Re-analyses only when its size changed since
    /// the last call and returns the current suggestion.
    pub fn observe(&mut self, jots: &[Jot]) -> Option<&MergeSuggestion> {
        if self.last_len != Some(jots.len()) {
            self.last_len = Some(jots.len());
            self.current = self.analyse(jots);
            tracing::debug!(
                jots = jots.len(),
                suggested = self.current.is_some(),
                "merge_advisor_refresh"
            );
        }
        self.current.as_ref()
    }

    /// Drop the current suggestion and never offer that pair again.
    /// Returns the dismissed suggestion so the caller can persist it.
    pub fn dismiss(&mut self) -> Option<MergeSuggestion> {
        let suggestion = self.current.take()?;
        self.dismissed
            .insert((suggestion.kept.clone(), suggestion.merged.clone()));
        Some(suggestion)
    }

    /// The suggestion from the last analysis, if still active
    pub fn current(&self) -> Option<&MergeSuggestion> {
        self.current.as_ref()
    }

    fn analyse(&self, jots: &[Jot]) -> Option<MergeSuggestion> {
        suggest_merge(jots, self.threshold, self.preview_length, &self.dismissed)
    }
}
