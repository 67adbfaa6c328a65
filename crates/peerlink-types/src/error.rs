//! Error types for the peer-support core.
//!
//! Absence of data (no profile, no matches, unknown counterpart) is modeled
//! with `Option` and empty collections, never as an error. `PeerError` exists
//! for store-backend and serialization faults only.

use thiserror::Error;

/// Unified error type for peer-support operations.
#[derive(Debug, Error)]
pub enum PeerError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
