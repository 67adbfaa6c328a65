//! # peerlink-themes
//!
//! Theme extraction and profile building for the Peerlink peer-support core.
//!
//! This crate turns a conversation transcript into a thematic profile:
//! - A fixed taxonomy of six wellness themes with keyword tables
//! - A pure extractor that scores themes by substring occurrence counts
//! - A profile builder that derives top themes and a progression stage
//!
//! Extraction is deliberately simple: case-normalized substring matching
//! with no stemming or word boundaries. A keyword can match inside a longer
//! word and count toward more than one theme.

pub mod builder;
pub mod config;
pub mod extractor;
pub mod profile;
pub mod taxonomy;

pub use builder::build_profile;
pub use config::ProfileConfig;
pub use extractor::extract_themes;
pub use profile::{Profile, Stage, ThemeScore};
pub use taxonomy::Theme;
