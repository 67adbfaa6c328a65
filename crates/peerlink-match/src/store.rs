//! Session store abstraction.
//!
//! The population (user id → profile) and the thread registry (chat id →
//! thread) are explicit injected state: the hosting layer owns a store
//! instance per session and passes it to the engine. Nothing here reads
//! ambient process-wide state.
//!
//! `InMemoryStore` is the reference backend; the trait methods return
//! `Result` so a persistent backend can surface real faults.

use std::collections::BTreeMap;

use tracing::debug;

use peerlink_themes::Profile;
use peerlink_types::{ChatId, ChatThread, PeerError, PeerMessage, UserId};

/// Storage seam for the per-session population and thread registry.
pub trait SessionStore {
    /// Get a profile by user id.
    fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, PeerError>;

    /// Insert or replace a profile, keyed by its user id.
    fn save_profile(&mut self, profile: Profile) -> Result<(), PeerError>;

    /// List all profiles in user-id order.
    fn list_profiles(&self) -> Result<Vec<Profile>, PeerError>;

    /// Set a profile's opt-in flag. Returns false when the user has no
    /// profile (absence, not an error).
    fn set_opt_in(&mut self, user_id: &str, opt_in: bool) -> Result<bool, PeerError>;

    /// Get a thread by chat id.
    fn get_thread(&self, chat_id: &str) -> Result<Option<ChatThread>, PeerError>;

    /// Insert a thread, keyed by its chat id.
    fn save_thread(&mut self, thread: ChatThread) -> Result<(), PeerError>;

    /// List all threads in chat-id order.
    fn list_threads(&self) -> Result<Vec<ChatThread>, PeerError>;

    /// Append a message to an existing thread. Returns false when the chat
    /// id is unknown (absence, not an error).
    fn append_message(&mut self, chat_id: &str, message: PeerMessage) -> Result<bool, PeerError>;
}

/// In-memory session store backed by ordered maps.
///
/// `BTreeMap` keeps enumeration deterministic, which the match ranking's
/// tie-break relies on.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: BTreeMap<UserId, Profile>,
    threads: BTreeMap<ChatId, ChatThread>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Number of stored threads.
    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}

impl SessionStore for InMemoryStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, PeerError> {
        Ok(self.profiles.get(user_id).cloned())
    }

    fn save_profile(&mut self, profile: Profile) -> Result<(), PeerError> {
        debug!(user_id = %profile.user_id, "saved profile");
        self.profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    fn list_profiles(&self) -> Result<Vec<Profile>, PeerError> {
        Ok(self.profiles.values().cloned().collect())
    }

    fn set_opt_in(&mut self, user_id: &str, opt_in: bool) -> Result<bool, PeerError> {
        match self.profiles.get_mut(user_id) {
            Some(profile) => {
                profile.opt_in = opt_in;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_thread(&self, chat_id: &str) -> Result<Option<ChatThread>, PeerError> {
        Ok(self.threads.get(chat_id).cloned())
    }

    fn save_thread(&mut self, thread: ChatThread) -> Result<(), PeerError> {
        debug!(chat_id = %thread.chat_id, "saved thread");
        self.threads.insert(thread.chat_id.clone(), thread);
        Ok(())
    }

    fn list_threads(&self) -> Result<Vec<ChatThread>, PeerError> {
        Ok(self.threads.values().cloned().collect())
    }

    fn append_message(&mut self, chat_id: &str, message: PeerMessage) -> Result<bool, PeerError> {
        match self.threads.get_mut(chat_id) {
            Some(thread) => {
                thread.append(message);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
