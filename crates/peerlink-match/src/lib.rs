//! # peerlink-match
//!
//! Peer matching and chat-thread lifecycle for the Peerlink core.
//!
//! This crate ranks an opted-in population of thematic profiles against a
//! querying user and manages the resulting two-party chat threads:
//! - Symmetric compatibility scoring (theme overlap + stage affinity)
//! - Ranked match queries that respect opt-in consent
//! - Idempotent chat-thread creation keyed by the unordered pair
//! - An injected session-store abstraction with an in-memory implementation
//!
//! All operations are synchronous and in-memory; the host owns the store's
//! lifetime and serializes access in multi-user deployments.

pub mod config;
pub mod engine;
pub mod score;
pub mod seed;
pub mod store;

pub use config::MatchConfig;
pub use engine::{MatchCandidate, MatchEngine};
pub use score::match_score;
pub use seed::{opt_in_all, seed_demo_population};
pub use store::{InMemoryStore, SessionStore};
