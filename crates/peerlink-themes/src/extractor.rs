//! Theme extraction from conversation transcripts.
//!
//! Pure functions; no side effects. Only user-authored messages contribute.
//! Matching is case-normalized substring counting with no stemming or word
//! boundaries, so "homework" scores both "home" (family) and "work"
//! (work_school). That double counting is intentional and load-bearing:
//! changing it would shift downstream match scores.

use std::collections::BTreeMap;

use peerlink_types::ChatMessage;

use crate::taxonomy::Theme;

/// Score each theme against the transcript's user-authored text.
///
/// Returns only themes with a strictly positive score. The map is ordered
/// by theme label, which makes downstream tie-breaking deterministic.
pub fn extract_themes(transcript: &[ChatMessage]) -> BTreeMap<Theme, u32> {
    let user_text = transcript
        .iter()
        .filter(|m| m.is_user())
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut scores = BTreeMap::new();
    for &theme in Theme::all() {
        let total: u32 = theme
            .keywords()
            .iter()
            .map(|keyword| count_occurrences(&user_text, keyword))
            .sum();
        if total > 0 {
            scores.insert(theme, total);
        }
    }
    scores
}

/// Count non-overlapping substring occurrences of `keyword` in `text`.
fn count_occurrences(text: &str, keyword: &str) -> u32 {
    text.matches(keyword).count() as u32
}
