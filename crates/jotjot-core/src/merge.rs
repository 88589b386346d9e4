//! Merging similar jots
//!
//! The analyzer only ranks pairs. This module turns the top pair into a
//! [`MergeSuggestion`] and performs the merge itself: the earlier jot is kept,
//! the later one's content is appended and its attachments are folded in.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::note::{Jot, JotId, MediaItem};
use crate::similarity::{SimilarPair, SimilarityAnalyzer};

/// Default text placed between the two contents of a merged jot
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Number of characters shown for each side of a suggestion
pub const DEFAULT_PREVIEW_LENGTH: usize = 50;

/// `(kept, merged)` ids of a pair the user declined to merge
pub type PairKey = (JotId, JotId);

/// A proposal to fold `merged` into `kept`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeSuggestion {
    pub kept: JotId,
    pub merged: JotId,
    pub score: f64,
    pub reason: String,
    pub kept_preview: String,
    pub merged_preview: String,
}

impl MergeSuggestion {
    pub fn from_pair(pair: &SimilarPair<'_>, preview_length: usize) -> Self {
        MergeSuggestion {
            kept: pair.first.id.clone(),
            merged: pair.second.id.clone(),
            score: pair.score,
            reason: pair.reason.clone(),
            kept_preview: pair.first.preview(preview_length),
            merged_preview: pair.second.preview(preview_length),
        }
    }
}

/// Whether `a`/`b` was dismissed, in either order
pub fn is_dismissed(dismissed: &HashSet<PairKey>, a: &str, b: &str) -> bool {
    dismissed.contains(&(a.to_string(), b.to_string()))
        || dismissed.contains(&(b.to_string(), a.to_string()))
}

/// Suggest merging the highest-scoring pair that clears `threshold` and has
/// not been dismissed
pub fn suggest_merge(
    jots: &[Jot],
    threshold: f64,
    preview_length: usize,
    dismissed: &HashSet<PairKey>,
) -> Option<MergeSuggestion> {
    SimilarityAnalyzer::new(jots)
        .find_similar_pairs(threshold)
        .into_iter()
        .find(|pair| !is_dismissed(dismissed, &pair.first.id, &pair.second.id))
        .map(|pair| MergeSuggestion::from_pair(&pair, preview_length))
}

/// Union of two attachment lists by id; `first` keeps its order and
/// `second` contributes only items not already present.
pub fn union_media(first: &[MediaItem], second: &[MediaItem]) -> Vec<MediaItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|item| seen.insert(item.id.as_str()))
        .cloned()
        .collect()
}

/// Build the jot that replaces `kept` after absorbing `merged`
pub fn merge_jots(
    kept: &Jot,
    merged: &Jot,
    separator: &str,
    now: DateTime<Utc>,
) -> Result<Jot> {
    if kept.id == merged.id {
        crate::bail_invalid!("merge", format!("cannot merge jot {} into itself", kept.id));
    }

    Ok(Jot {
        id: kept.id.clone(),
        content: format!("{}{}{}", kept.content, separator, merged.content),
        is_pinned: kept.is_pinned,
        created_at: kept.created_at,
        updated_at: now,
        media: union_media(&kept.media, &merged.media),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::MediaKind;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn media(id: &str) -> MediaItem {
        let mut item = MediaItem::new(MediaKind::Image, id.as_bytes().to_vec());
        item.id = id.to_string();
        item
    }

    #[test]
    fn test_merge_concatenates_and_keeps_first() {
        let kept = Jot::new("groceries\nmilk")
            .with_id("k")
            .with_created_at(t0())
            .pinned(true);
        let merged = Jot::new("groceries\neggs")
            .with_id("m")
            .with_created_at(t0() + Duration::minutes(3));
        let now = t0() + Duration::hours(1);

        let result = merge_jots(&kept, &merged, DEFAULT_SEPARATOR, now).unwrap();
        assert_eq!(result.id, "k");
        assert_eq!(result.content, "groceries\nmilk\n\ngroceries\neggs");
        assert!(result.is_pinned);
        assert_eq!(result.created_at, t0());
        assert_eq!(result.updated_at, now);
    }

    #[test]
    fn test_merge_into_self_is_rejected() {
        let jot = Jot::new("x").with_id("same");
        assert!(merge_jots(&jot, &jot, DEFAULT_SEPARATOR, t0()).is_err());
    }

    #[test]
    fn test_union_media_without_duplicates() {
        let shared = media("shared");
        let kept = Jot::new("trip photos")
            .with_id("k")
            .with_media(vec![media("a"), shared.clone()]);
        let merged = Jot::new("trip photos again")
            .with_id("m")
            .with_media(vec![shared, media("b")]);

        let result = merge_jots(&kept, &merged, " | ", t0()).unwrap();
        let ids: Vec<&str> = result.media.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "shared", "b"]);
    }

    #[test]
    fn test_suggestion_uses_top_pair_and_keeps_lower_index() {
        let jots = vec![
            Jot::new("renew passport").with_id("p").with_created_at(t0()),
            Jot::new("plan trip to lisbon\nflights hotel")
                .with_id("a")
                .with_created_at(t0()),
            Jot::new("plan trip to lisbon\nflights hotel museum")
                .with_id("b")
                .with_created_at(t0() + Duration::minutes(2)),
        ];

        let suggestion = suggest_merge(&jots, 0.35, DEFAULT_PREVIEW_LENGTH, &HashSet::new())
            .unwrap();
        assert_eq!(suggestion.kept, "a");
        assert_eq!(suggestion.merged, "b");
        assert!(suggestion.reason.contains("关键词相似"));
        assert_eq!(suggestion.kept_preview, "plan trip to lisbon\nflights hotel");

        let short = suggest_merge(&jots, 0.35, 4, &HashSet::new()).unwrap();
        assert_eq!(short.kept_preview, "plan...");
    }

    #[test]
    fn test_dismissed_pair_is_skipped_in_either_order() {
        let jots = vec![
            Jot::new("gym schedule\nmonday legs")
                .with_id("g1")
                .with_created_at(t0()),
            Jot::new("gym schedule\nmonday legs tuesday arms")
                .with_id("g2")
                .with_created_at(t0() + Duration::minutes(5)),
        ];

        let dismissed: HashSet<PairKey> = [("g2".to_string(), "g1".to_string())].into();
        assert!(is_dismissed(&dismissed, "g1", "g2"));
        assert!(suggest_merge(&jots, 0.35, DEFAULT_PREVIEW_LENGTH, &dismissed).is_none());
        assert!(suggest_merge(&jots, 0.35, DEFAULT_PREVIEW_LENGTH, &HashSet::new()).is_some());
    }

    #[test]
    fn test_top_pair_merge_unions_attachments() {
        let photo = media("photo");
        let jots = vec![
            Jot::new("beach day\nsunset photos")
                .with_id("a")
                .with_created_at(t0())
                .with_media(vec![photo.clone(), media("video")]),
            Jot::new("unrelated errand list")
                .with_id("x")
                .with_created_at(t0() + Duration::days(3)),
            Jot::new("beach day\nsunset photos more")
                .with_id("b")
                .with_created_at(t0() + Duration::minutes(1))
                .with_media(vec![photo, media("ticket")]),
        ];

        let pair = SimilarityAnalyzer::new(&jots).best_pair(0.35).unwrap();
        assert_eq!((pair.first.id.as_str(), pair.second.id.as_str()), ("a", "b"));

        let merged = merge_jots(pair.first, pair.second, DEFAULT_SEPARATOR, t0()).unwrap();
        let ids: Vec<&str> = merged.media.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["photo", "video", "ticket"]);
    }

    #[test]
    fn test_no_suggestion_below_threshold() {
        let jots = vec![
            Jot::new("alpha").with_created_at(t0()),
            Jot::new("zzz").with_created_at(t0() + Duration::days(2)),
        ];
        assert!(suggest_merge(&jots, 0.35, DEFAULT_PREVIEW_LENGTH, &HashSet::new()).is_none());
    }
}
