//! # peerlink-types
//!
//! Shared domain types for the Peerlink peer-support core.
//!
//! This crate defines the data structures used throughout the system:
//! - Transcript messages: role-tagged conversation turns supplied by the host
//! - Ids: opaque participant ids and pair-derived chat ids
//! - Chat threads: ephemeral two-party message histories
//! - Errors: the unified error type for store-backed operations

pub mod error;
pub mod id;
pub mod message;
pub mod thread;

pub use error::PeerError;
pub use id::{chat_id_for, generate_user_id, ChatId, UserId};
pub use message::{ChatMessage, MessageRole};
pub use thread::{ChatThread, PeerMessage};
