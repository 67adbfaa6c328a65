//! Two-party chat threads.
//!
//! Threads are ephemeral, session-lifetime records: exactly two immutable
//! participants and an append-only message history. At most one thread exists
//! per unordered participant pair; callers derive the id with
//! [`crate::id::chat_id_for`] before creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ChatId, UserId};

/// A message posted into a peer chat thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerMessage {
    /// Id of the sending participant
    pub sender: UserId,
    /// Message text
    pub text: String,
    /// When the message was posted
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub sent_at: DateTime<Utc>,
}

impl PeerMessage {
    /// Create a message stamped with the current time.
    pub fn now(sender: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

/// An ephemeral chat thread between two participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatThread {
    /// Pair-derived thread identifier
    pub chat_id: ChatId,
    /// The two participants, fixed at creation
    participants: [UserId; 2],
    /// Append-only message history
    messages: Vec<PeerMessage>,
    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl ChatThread {
    /// Create an empty thread for the given pair.
    pub fn new(chat_id: ChatId, user_a: impl Into<UserId>, user_b: impl Into<UserId>) -> Self {
        Self {
            chat_id,
            participants: [user_a.into(), user_b.into()],
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The two participant ids.
    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    /// The message history, oldest first.
    pub fn messages(&self) -> &[PeerMessage] {
        &self.messages
    }

    /// Append a message to the history.
    pub fn append(&mut self, message: PeerMessage) {
        self.messages.push(message);
    }

    /// Check whether the given user is one of the two participants.
    pub fn involves(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// The participant opposite the given user, if the user is in the thread.
    pub fn counterpart_of(&self, user_id: &str) -> Option<&UserId> {
        if !self.involves(user_id) {
            return None;
        }
        self.participants.iter().find(|p| *p != user_id)
    }

    /// Serialize the thread to JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize a thread from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::chat_id_for;

    fn thread() -> ChatThread {
        ChatThread::new(chat_id_for("alice", "bob"), "alice", "bob")
    }

    #[test]
    fn test_new_thread_is_empty() {
        let t = thread();
        assert!(t.messages().is_empty());
        assert_eq!(t.participants(), &["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut t = thread();
        t.append(PeerMessage::now("alice", "hi"));
        t.append(PeerMessage::now("bob", "hey"));
        assert_eq!(t.messages().len(), 2);
        assert_eq!(t.messages()[0].sender, "alice");
        assert_eq!(t.messages()[1].sender, "bob");
    }

    #[test]
    fn test_involves_and_counterpart() {
        let t = thread();
        assert!(t.involves("alice"));
        assert!(t.involves("bob"));
        assert!(!t.involves("carol"));
        assert_eq!(t.counterpart_of("alice"), Some(&"bob".to_string()));
        assert_eq!(t.counterpart_of("bob"), Some(&"alice".to_string()));
        assert_eq!(t.counterpart_of("carol"), None);
    }

    #[test]
    fn test_thread_serialization_roundtrip() {
        let mut t = thread();
        t.append(PeerMessage::now("alice", "how are you holding up?"));

        let bytes = t.to_bytes().unwrap();
        let decoded = ChatThread::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.chat_id, t.chat_id);
        assert_eq!(decoded.participants(), t.participants());
        assert_eq!(decoded.messages().len(), 1);
        assert_eq!(decoded.messages()[0].text, "how are you holding up?");
    }
}
