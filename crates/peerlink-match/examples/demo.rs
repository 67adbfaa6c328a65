//! End-to-end demo: seed a population, build a profile from a sample
//! transcript, rank matches, and exchange a chat message.
//!
//! Run with: `cargo run -p peerlink-match --example demo`

use peerlink_match::{opt_in_all, seed_demo_population, InMemoryStore, MatchEngine, SessionStore};
use peerlink_themes::{build_profile, ProfileConfig};
use peerlink_types::{generate_user_id, ChatMessage};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut store = InMemoryStore::new();
    let profile_config = ProfileConfig::default();

    let seeded = seed_demo_population(&mut store, &profile_config)?;
    opt_in_all(&mut store)?;
    println!("seeded {} demo profiles", seeded);

    let my_id = generate_user_id();
    let transcript = vec![
        ChatMessage::user("I've been anxious about work all week"),
        ChatMessage::assistant("What's been weighing on you the most?"),
        ChatMessage::user("Deadline stress mostly, and worrying I'll fall behind"),
        ChatMessage::assistant("That kind of pressure adds up fast."),
    ];

    let profile = build_profile(&my_id, &transcript, &profile_config)
        .expect("demo transcript always yields a profile");
    println!(
        "your profile: stage={}, themes={:?}",
        profile.stage,
        profile
            .top_themes
            .iter()
            .map(|t| (t.theme.label(), t.count))
            .collect::<Vec<_>>()
    );
    store.save_profile(profile)?;
    store.set_opt_in(&my_id, true)?;

    let mut engine = MatchEngine::new(&mut store);
    let matches = engine.find_matches(&my_id)?;
    println!("found {} match(es)", matches.len());
    for candidate in &matches {
        println!("  {}% · {}", candidate.score, candidate.user_id);
    }

    if let Some(best) = matches.first() {
        let chat_id = engine.create_chat(&my_id, &best.user_id)?;
        engine.post_message(&chat_id, &my_id, "hey, sounds like we're in the same boat")?;
        let thread = store.get_thread(&chat_id)?.expect("thread was just created");
        println!(
            "opened chat {} with {} ({} message)",
            chat_id,
            best.user_id,
            thread.messages().len()
        );
    }

    Ok(())
}
