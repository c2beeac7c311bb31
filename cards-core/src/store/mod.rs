//! Top-level module for the flashcard core.
//!
//! This module groups the three pieces of the system:
//! - Word-pair records and identifiers (`WordPair`, `WordId`, `Direction`)
//! - The durable collection owner (`WordStore`)
//! - Stateless selection helpers (`pick_random`, `known_words`)

/// Word-pair record, process-local identifiers and the direction enum.
pub mod word_pair;

/// Durable owner of the word collection.
///
/// Handles loading (with first-run seeding), atomic saving and
/// id-addressed weight updates.
pub mod word_store;

/// Stateless sampling over a collection snapshot.
///
/// Weighted random selection and the known-words filter.
pub mod sampler;
