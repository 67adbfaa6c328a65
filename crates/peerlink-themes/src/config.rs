//! Profile building configuration.

use serde::{Deserialize, Serialize};

/// Configuration for profile building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Minimum total transcript length before a profile may be built
    #[serde(default = "default_min_transcript_len")]
    pub min_transcript_len: usize,

    /// User-message count at which the stage becomes Exploring (inclusive)
    #[serde(default = "default_exploring_at")]
    pub exploring_at: usize,

    /// User-message count at which the stage becomes Reflecting (inclusive)
    #[serde(default = "default_reflecting_at")]
    pub reflecting_at: usize,

    /// Maximum number of top themes kept on a profile
    #[serde(default = "default_top_themes")]
    pub top_themes: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            min_transcript_len: default_min_transcript_len(),
            exploring_at: default_exploring_at(),
            reflecting_at: default_reflecting_at(),
            top_themes: default_top_themes(),
        }
    }
}

fn default_min_transcript_len() -> usize {
    2
}
fn default_exploring_at() -> usize {
    5
}
fn default_reflecting_at() -> usize {
    15
}
fn default_top_themes() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProfileConfig::default();
        assert_eq!(config.min_transcript_len, 2);
        assert_eq!(config.exploring_at, 5);
        assert_eq!(config.reflecting_at, 15);
        assert_eq!(config.top_themes, 2);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: ProfileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.exploring_at, 5);
        assert_eq!(config.top_themes, 2);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let config: ProfileConfig = serde_json::from_str(r#"{"reflecting_at": 20}"#).unwrap();
        assert_eq!(config.reflecting_at, 20);
        assert_eq!(config.exploring_at, 5);
    }
}
