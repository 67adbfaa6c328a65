//! Participant and chat-thread identifiers.
//!
//! User ids are opaque ULID strings generated once per session by the host.
//! Chat ids are derived from the unordered participant pair, so the same two
//! users always map to the same thread regardless of argument order.

use sha2::{Digest, Sha256};
use ulid::Ulid;

/// Opaque stable identifier for a participant.
pub type UserId = String;

/// Identifier for a two-party chat thread.
pub type ChatId = String;

/// Number of hex characters in a chat id.
const CHAT_ID_LEN: usize = 8;

/// Generate a fresh participant id.
///
/// The host calls this once per session; the id stays stable for the
/// session's lifetime.
pub fn generate_user_id() -> UserId {
    Ulid::new().to_string()
}

/// Derive the chat id for an unordered participant pair.
///
/// The pair is sorted before hashing, so `chat_id_for(a, b)` and
/// `chat_id_for(b, a)` always agree.
pub fn chat_id_for(user_a: &str, user_b: &str) -> ChatId {
    let (lo, hi) = if user_a <= user_b {
        (user_a, user_b)
    } else {
        (user_b, user_a)
    };
    let digest = Sha256::digest(format!("{}:{}", lo, hi).as_bytes());
    digest[..CHAT_ID_LEN / 2]
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_id_unique() {
        let a = generate_user_id();
        let b = generate_user_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_chat_id_order_independent() {
        assert_eq!(chat_id_for("alice", "bob"), chat_id_for("bob", "alice"));
    }

    #[test]
    fn test_chat_id_deterministic() {
        assert_eq!(chat_id_for("alice", "bob"), chat_id_for("alice", "bob"));
    }

    #[test]
    fn test_chat_id_distinct_pairs() {
        assert_ne!(chat_id_for("alice", "bob"), chat_id_for("alice", "carol"));
    }

    #[test]
    fn test_chat_id_length() {
        let id = chat_id_for("alice", "bob");
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
