//! Match scoring configuration.

use serde::{Deserialize, Serialize};

/// Configuration for compatibility scoring and match queries.
///
/// With the default weights the score range is [0, 100]: up to 50 points
/// from theme overlap plus a 50 or 25 point stage bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum score for a candidate to appear in match results
    #[serde(default = "default_min_score")]
    pub min_score: u32,

    /// Weight applied to the Jaccard theme-overlap component
    #[serde(default = "default_theme_weight")]
    pub theme_weight: f64,

    /// Bonus when both profiles share the same stage
    #[serde(default = "default_stage_match_bonus")]
    pub stage_match_bonus: f64,

    /// Bonus when the stages differ
    #[serde(default = "default_stage_mismatch_bonus")]
    pub stage_mismatch_bonus: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            theme_weight: default_theme_weight(),
            stage_match_bonus: default_stage_match_bonus(),
            stage_mismatch_bonus: default_stage_mismatch_bonus(),
        }
    }
}

fn default_min_score() -> u32 {
    40
}
fn default_theme_weight() -> f64 {
    50.0
}
fn default_stage_match_bonus() -> f64 {
    50.0
}
fn default_stage_mismatch_bonus() -> f64 {
    25.0
}
