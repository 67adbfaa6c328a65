//! The closed theme taxonomy and its keyword tables.

use serde::{Deserialize, Serialize};

/// A wellness conversation theme.
///
/// The set is closed; variants are declared in label order so that the
/// derived `Ord` sorts themes alphabetically by label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Worry, panic, and stress
    Anxiety,
    /// Low mood, emptiness, loneliness
    Depression,
    /// Family and home life
    Family,
    /// Identity, culture, belonging
    Identity,
    /// Friendships and romantic relationships
    Relationships,
    /// Work and school pressure
    WorkSchool,
}

impl Theme {
    /// Stable lowercase label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Anxiety => "anxiety",
            Theme::Depression => "depression",
            Theme::Family => "family",
            Theme::Identity => "identity",
            Theme::Relationships => "relationships",
            Theme::WorkSchool => "work_school",
        }
    }

    /// Parse from label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "anxiety" => Some(Theme::Anxiety),
            "depression" => Some(Theme::Depression),
            "family" => Some(Theme::Family),
            "identity" => Some(Theme::Identity),
            "relationships" => Some(Theme::Relationships),
            "work_school" => Some(Theme::WorkSchool),
            _ => None,
        }
    }

    /// All themes, in label order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Anxiety,
            Theme::Depression,
            Theme::Family,
            Theme::Identity,
            Theme::Relationships,
            Theme::WorkSchool,
        ]
    }

    /// Keywords whose substring occurrences score this theme.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::Anxiety => &["anxious", "worried", "nervous", "panic", "stress", "overwhelm"],
            Theme::Depression => &["sad", "depressed", "hopeless", "down", "empty", "lonely"],
            Theme::Relationships => &["friend", "partner", "love", "breakup", "dating", "conflict"],
            Theme::WorkSchool => &["work", "school", "job", "deadline", "exam", "pressure"],
            Theme::Identity => &["identity", "culture", "belong", "different", "acceptance"],
            Theme::Family => &["parent", "family", "sibling", "home", "support"],
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
