//! Profile data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use peerlink_types::UserId;

use crate::config::ProfileConfig;
use crate::taxonomy::Theme;

/// Progression stage, derived purely from the user-authored message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Fewer than `exploring_at` user messages
    Starting,
    /// At least `exploring_at`, fewer than `reflecting_at`
    Exploring,
    /// At least `reflecting_at`
    Reflecting,
}

impl Stage {
    /// Assign the stage for a user-message count.
    ///
    /// Boundaries are inclusive on the lower end: exactly `exploring_at`
    /// messages is `Exploring`, exactly `reflecting_at` is `Reflecting`.
    pub fn for_message_count(count: usize, config: &ProfileConfig) -> Self {
        if count >= config.reflecting_at {
            Stage::Reflecting
        } else if count >= config.exploring_at {
            Stage::Exploring
        } else {
            Stage::Starting
        }
    }

    /// Stable lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Starting => "starting",
            Stage::Exploring => "exploring",
            Stage::Reflecting => "reflecting",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A theme together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeScore {
    /// The scored theme
    pub theme: Theme,
    /// Summed keyword occurrence count
    pub count: u32,
}

/// A participant's thematic profile.
///
/// Built from the full transcript on every rebuild; `opt_in` always resets
/// to false on (re)build, so hosts must re-apply consent afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque stable participant id
    pub user_id: UserId,
    /// Up to `top_themes` entries, count descending, label-ascending ties
    pub top_themes: Vec<ThemeScore>,
    /// Progression stage
    pub stage: Stage,
    /// Visibility to matching; defaults false
    #[serde(default)]
    pub opt_in: bool,
}

impl Profile {
    /// The set of theme labels on this profile.
    pub fn themes(&self) -> BTreeSet<Theme> {
        self.top_themes.iter().map(|t| t.theme).collect()
    }

    /// Serialize the profile to JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize a profile from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
