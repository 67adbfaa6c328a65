//! Match queries and chat-thread lifecycle.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use peerlink_types::{chat_id_for, ChatId, ChatThread, PeerError, PeerMessage, UserId};

use crate::config::MatchConfig;
use crate::score::match_score;
use crate::store::SessionStore;

/// A ranked match candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Candidate's user id
    pub user_id: UserId,
    /// Compatibility score against the querying user
    pub score: u32,
}

/// Match engine over an injected session store.
///
/// Borrows the store exclusively for its lifetime; hosts serialize access
/// across sessions.
pub struct MatchEngine<'a, S: SessionStore> {
    store: &'a mut S,
    config: MatchConfig,
}

impl<'a, S: SessionStore> MatchEngine<'a, S> {
    /// Create an engine with the default configuration.
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            config: MatchConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(store: &'a mut S, config: MatchConfig) -> Self {
        Self { store, config }
    }

    /// Rank opted-in candidates against the querying user.
    ///
    /// Empty when the user has no profile or has not opted in (absence, not
    /// an error). Candidates score at least `min_score`, never include the
    /// querying user, and are ordered score-descending with user-id
    /// ascending ties.
    #[instrument(skip(self))]
    pub fn find_matches(&self, my_id: &str) -> Result<Vec<MatchCandidate>, PeerError> {
        let Some(my_profile) = self.store.get_profile(my_id)? else {
            return Ok(Vec::new());
        };
        if !my_profile.opt_in {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for profile in self.store.list_profiles()? {
            if profile.user_id == my_id || !profile.opt_in {
                continue;
            }
            let score = match_score(Some(&my_profile), Some(&profile), &self.config);
            if score >= self.config.min_score {
                matches.push(MatchCandidate {
                    user_id: profile.user_id,
                    score,
                });
            }
        }

        matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.user_id.cmp(&b.user_id)));
        debug!(count = matches.len(), "ranked match candidates");
        Ok(matches)
    }

    /// Create (or return) the chat thread for an unordered pair.
    ///
    /// Idempotent: the same pair in either order yields the same chat id
    /// and never a duplicate thread. No opt-in validation; any two ids may
    /// form a thread.
    #[instrument(skip(self))]
    pub fn create_chat(&mut self, user_a: &str, user_b: &str) -> Result<ChatId, PeerError> {
        let chat_id = chat_id_for(user_a, user_b);

        if self.store.get_thread(&chat_id)?.is_some() {
            debug!(%chat_id, "reusing existing peer chat");
            return Ok(chat_id);
        }

        let thread = ChatThread::new(chat_id.clone(), user_a, user_b);
        self.store.save_thread(thread)?;
        info!(%chat_id, "created peer chat");
        Ok(chat_id)
    }

    /// Append a timestamped message to an existing thread.
    ///
    /// An unknown chat id is ignored with a warning; hosts only hold ids
    /// obtained from [`Self::create_chat`].
    #[instrument(skip(self, text))]
    pub fn post_message(
        &mut self,
        chat_id: &str,
        sender: &str,
        text: &str,
    ) -> Result<(), PeerError> {
        let message = PeerMessage::now(sender, text);
        if !self.store.append_message(chat_id, message)? {
            warn!(chat_id, "dropping message for unknown chat thread");
        }
        Ok(())
    }

    /// Set a user's opt-in flag. Returns false when the user has no profile.
    pub fn set_opt_in(&mut self, user_id: &str, opt_in: bool) -> Result<bool, PeerError> {
        self.store.set_opt_in(user_id, opt_in)
    }

    /// The engine's scoring configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
