//! Flashcard word-selection and progress-tracking core.
//!
//! This crate is the data layer of a bilingual flashcard trainer:
//! - Durable word-pair storage (a JSON deck file, written atomically)
//! - One familiarity weight per word pair and translation direction
//! - Weight-proportional random selection of the next card to show
//!
//! Presentation concerns (card rendering, gestures, menus) belong to the
//! consumer. The core owns the collection and the selection logic, and
//! takes the active direction as an explicit parameter on every call.

/// Word-pair records, the durable store and the sampling logic.
pub mod store;

/// I/O utilities (atomic writes, path helpers).
///
/// Not exposed
pub(crate) mod io;
