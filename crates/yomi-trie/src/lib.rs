//! Prefix dictionary engine.
//!
//! This crate provides the trie-structured mapping tables used by the
//! alignment engine: each dictionary maps character-sequence keys to sets of
//! pronunciation-fragment labels, supports prefix matching against input
//! text, and round-trips through a line-oriented text format.
//!
//! # Architecture
//!
//! - [`trie`] -- The prefix dictionary itself (one `char` per edge, a label
//!   set per node)
//! - [`matcher`] -- Longest-first prefix matching against a dictionary
//! - [`format`] -- Text serialization and deserialization

pub mod format;
pub mod matcher;
pub mod trie;

/// Error type for prefix dictionary lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// No node exists at the requested key path.
    #[error("no entry at key {key:?}")]
    KeyNotFound { key: String },
}
