//! Demo population seeding.
//!
//! Synthesizes a handful of themed transcripts and feeds them through the
//! profile builder, so matches can be demoed without waiting for organic
//! traffic. Not part of the core contract; everything goes through the same
//! store abstraction the host uses.

use tracing::info;

use peerlink_themes::{build_profile, ProfileConfig};
use peerlink_types::{ChatMessage, PeerError};

use crate::store::SessionStore;

/// Build and insert profiles for the fixed demo transcripts.
///
/// Returns the number of profiles inserted. Seeded profiles start with
/// `opt_in` false, like any freshly built profile; call [`opt_in_all`] to
/// make the population visible to matching.
pub fn seed_demo_population<S: SessionStore>(
    store: &mut S,
    config: &ProfileConfig,
) -> Result<usize, PeerError> {
    let mut inserted = 0;
    for (user_id, transcript) in demo_transcripts() {
        if let Some(profile) = build_profile(user_id, &transcript, config) {
            store.save_profile(profile)?;
            inserted += 1;
        }
    }
    info!(inserted, "seeded demo population");
    Ok(inserted)
}

/// Opt in every stored profile. Returns the number updated.
pub fn opt_in_all<S: SessionStore>(store: &mut S) -> Result<usize, PeerError> {
    let mut updated = 0;
    for profile in store.list_profiles()? {
        if store.set_opt_in(&profile.user_id, true)? {
            updated += 1;
        }
    }
    Ok(updated)
}

/// Fixed demo transcripts spanning the theme taxonomy.
fn demo_transcripts() -> Vec<(&'static str, Vec<ChatMessage>)> {
    vec![
        (
            "demo-ava",
            vec![
                ChatMessage::user("I've been feeling anxious about my job lately"),
                ChatMessage::assistant("That sounds heavy. What part worries you most?"),
                ChatMessage::user("The deadline pressure keeps my stress levels high"),
                ChatMessage::assistant("Deadlines can really pile up."),
                ChatMessage::user("I keep thinking I'm not good enough at work"),
            ],
        ),
        (
            "demo-ben",
            vec![
                ChatMessage::user("I'm anxious at work most days"),
                ChatMessage::assistant("What tends to set it off?"),
                ChatMessage::user("Meetings make me panic and the pressure never lets up"),
                ChatMessage::assistant("That sounds exhausting."),
            ],
        ),
        (
            "demo-cleo",
            vec![
                ChatMessage::user("My partner and I keep running into conflict"),
                ChatMessage::assistant("What does the conflict look like?"),
                ChatMessage::user("We argue and then I feel distant from the person I love"),
                ChatMessage::assistant("Feeling distant after arguments is common."),
                ChatMessage::user("I love them but the fighting is wearing me out"),
            ],
        ),
        (
            "demo-dan",
            vec![
                ChatMessage::user("I feel sad and empty most of the time"),
                ChatMessage::assistant("I'm sorry you're carrying that."),
                ChatMessage::user("Everything feels hopeless, like I'm just going through the motions"),
                ChatMessage::assistant("That numbness can be really hard."),
                ChatMessage::user("It's a weight I can't seem to put down"),
            ],
        ),
        (
            "demo-eri",
            vec![
                ChatMessage::user("I'm struggling with my identity and where I belong"),
                ChatMessage::assistant("What's bringing that up for you?"),
                ChatMessage::user("I feel different from what my family and culture expect"),
                ChatMessage::assistant("That gap can be isolating."),
                ChatMessage::user("I want to honor my culture and still be myself"),
                ChatMessage::assistant("Holding both is a real balancing act."),
            ],
        ),
        (
            "demo-fay",
            vec![
                ChatMessage::user("I've been lonely and anxious about my social life"),
                ChatMessage::assistant("What does that anxiety feel like?"),
                ChatMessage::user("I get worried that people are judging me"),
                ChatMessage::assistant("Those worries can loom larger than they are."),
            ],
        ),
    ]
}
