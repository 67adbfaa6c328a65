//! Pairwise compatibility scoring.
//!
//! Pure functions; symmetric in their profile arguments.

use peerlink_themes::Profile;

use crate::config::MatchConfig;

/// Score two profiles for compatibility.
///
/// Either argument may be absent (missing profile); the score is then 0.
/// The theme component is the Jaccard overlap of the top-theme labels scaled
/// by `theme_weight`; the stage component adds `stage_match_bonus` or
/// `stage_mismatch_bonus`. The sum is truncated, not rounded.
pub fn match_score(a: Option<&Profile>, b: Option<&Profile>, config: &MatchConfig) -> u32 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0;
    };

    let mut score = theme_overlap(a, b) * config.theme_weight;
    score += if a.stage == b.stage {
        config.stage_match_bonus
    } else {
        config.stage_mismatch_bonus
    };

    score as u32
}

/// Jaccard overlap of the two profiles' top-theme labels, in [0, 1].
///
/// The denominator is floored at 1: both-empty top themes should be
/// impossible given the profile builder's invariant, but a hand-built or
/// deserialized profile can still violate it.
fn theme_overlap(a: &Profile, b: &Profile) -> f64 {
    let themes_a = a.themes();
    let themes_b = b.themes();

    let intersection = themes_a.intersection(&themes_b).count();
    let union = themes_a.union(&themes_b).count();

    intersection as f64 / union.max(1) as f64
}
