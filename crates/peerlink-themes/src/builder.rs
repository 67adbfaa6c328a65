//! Profile building from conversation transcripts.

use tracing::debug;

use peerlink_types::ChatMessage;

use crate::config::ProfileConfig;
use crate::extractor::extract_themes;
use crate::profile::{Profile, Stage, ThemeScore};

/// Build a profile from the full transcript, or signal "no profile".
///
/// Returns `None` (absence, not an error) when the transcript is shorter
/// than `min_transcript_len` or produces no theme with a positive score.
///
/// The profile is recomputed from scratch on every call and `opt_in` always
/// resets to false, so hosts must re-apply consent after a rebuild.
pub fn build_profile(
    user_id: &str,
    transcript: &[ChatMessage],
    config: &ProfileConfig,
) -> Option<Profile> {
    if transcript.len() < config.min_transcript_len {
        return None;
    }

    let themes = extract_themes(transcript);
    if themes.is_empty() {
        return None;
    }

    let user_messages = transcript.iter().filter(|m| m.is_user()).count();
    let stage = Stage::for_message_count(user_messages, config);

    // BTreeMap iteration is label-ascending; the stable sort keeps that
    // order for equal counts.
    let mut top_themes: Vec<ThemeScore> = themes
        .into_iter()
        .map(|(theme, count)| ThemeScore { theme, count })
        .collect();
    top_themes.sort_by(|a, b| b.count.cmp(&a.count));
    top_themes.truncate(config.top_themes);

    debug!(user_id, stage = %stage, themes = top_themes.len(), "built profile");

    Some(Profile {
        user_id: user_id.to_string(),
        top_themes,
        stage,
        opt_in: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Theme;

    fn config() -> ProfileConfig {
        ProfileConfig::default()
    }

    /// A transcript of `n` themed user messages with interleaved replies.
    fn themed_transcript(n: usize) -> Vec<ChatMessage> {
        let mut transcript = Vec::new();
        for _ in 0..n {
            transcript.push(ChatMessage::user("feeling anxious today"));
            transcript.push(ChatMessage::assistant("Thanks for sharing that."));
        }
        transcript
    }

    #[test]
    fn test_short_transcript_yields_no_profile() {
        assert!(build_profile("u1", &[], &config()).is_none());
        let one = vec![ChatMessage::user("I'm anxious")];
        assert!(build_profile("u1", &one, &config()).is_none());
    }

    #[test]
    fn test_no_themes_yields_no_profile() {
        let transcript = vec![
            ChatMessage::user("nice weather today"),
            ChatMessage::assistant("It really is."),
        ];
        assert!(build_profile("u1", &transcript, &config()).is_none());
    }

    #[test]
    fn test_keyword_inside_longer_word_still_builds_a_profile() {
        // "lovely" contains the relationships keyword "love"; substring
        // matching means this transcript is not themeless
        let transcript = vec![
            ChatMessage::user("what a lovely afternoon"),
            ChatMessage::assistant("It really is."),
        ];
        let profile = build_profile("u1", &transcript, &config()).unwrap();
        assert_eq!(profile.top_themes.len(), 1);
        assert_eq!(profile.top_themes[0].theme, Theme::Relationships);
        assert_eq!(profile.top_themes[0].count, 1);
    }

    #[test]
    fn test_stage_boundaries_through_builder() {
        let p = build_profile("u1", &themed_transcript(4), &config()).unwrap();
        assert_eq!(p.stage, Stage::Starting);

        let p = build_profile("u1", &themed_transcript(5), &config()).unwrap();
        assert_eq!(p.stage, Stage::Exploring);

        let p = build_profile("u1", &themed_transcript(15), &config()).unwrap();
        assert_eq!(p.stage, Stage::Reflecting);
    }

    #[test]
    fn test_worked_scenario() {
        let transcript = vec![
            ChatMessage::user("I'm anxious about work"),
            ChatMessage::assistant("That sounds hard."),
            ChatMessage::user("I'm anxious about work again"),
            ChatMessage::assistant("It keeps coming back."),
            ChatMessage::user("still anxious"),
        ];
        let profile = build_profile("u1", &transcript, &config()).unwrap();

        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.stage, Stage::Starting); // 3 user messages
        assert_eq!(profile.top_themes.len(), 2);
        assert_eq!(profile.top_themes[0].theme, Theme::Anxiety);
        assert_eq!(profile.top_themes[0].count, 3);
        assert_eq!(profile.top_themes[1].theme, Theme::WorkSchool);
        assert_eq!(profile.top_themes[1].count, 2);
        assert!(!profile.opt_in);
    }

    #[test]
    fn test_top_themes_capped_at_two() {
        let transcript = vec![
            ChatMessage::user("anxious anxious sad sad parent"),
            ChatMessage::assistant("That's a lot at once."),
        ];
        let profile = build_profile("u1", &transcript, &config()).unwrap();
        assert_eq!(profile.top_themes.len(), 2);
        assert_eq!(profile.top_themes[0].theme, Theme::Anxiety);
        assert_eq!(profile.top_themes[1].theme, Theme::Depression);
    }

    #[test]
    fn test_equal_counts_break_ties_by_label() {
        // one hit each for work_school ("work"), anxiety ("anxious"),
        // depression ("sad"); anxiety and depression sort before work_school
        let transcript = vec![
            ChatMessage::user("work made me anxious and sad"),
            ChatMessage::assistant("I'm sorry to hear that."),
        ];
        let profile = build_profile("u1", &transcript, &config()).unwrap();
        assert_eq!(profile.top_themes[0].theme, Theme::Anxiety);
        assert_eq!(profile.top_themes[1].theme, Theme::Depression);
    }

    #[test]
    fn test_rebuild_resets_opt_in() {
        let mut transcript = themed_transcript(3);
        let mut profile = build_profile("u1", &transcript, &config()).unwrap();
        profile.opt_in = true;

        transcript.push(ChatMessage::user("still feeling anxious"));
        transcript.push(ChatMessage::assistant("Let's talk through it."));
        let rebuilt = build_profile("u1", &transcript, &config()).unwrap();
        assert!(!rebuilt.opt_in);
    }

    #[test]
    fn test_idempotent_for_same_transcript() {
        let transcript = themed_transcript(6);
        let a = build_profile("u1", &transcript, &config()).unwrap();
        let b = build_profile("u1", &transcript, &config()).unwrap();
        assert_eq!(a.stage, b.stage);
        assert_eq!(a.top_themes, b.top_themes);
        assert_eq!(a.opt_in, b.opt_in);
    }
}
