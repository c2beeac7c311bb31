use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Rating meaning "known" in the rated direction.
///
/// A known word no longer contributes to the weighted draw, but it stays
/// eligible through the uniform fallback so familiar material resurfaces.
pub const RATING_KNOWN: u32 = 0;

/// Rating meaning "needs more practice" in the rated direction.
///
/// A fixed non-zero weight: the rating model is two-state, not a
/// continuous strength. Callers are expected to pass exactly
/// `RATING_KNOWN` or `RATING_PRACTICE`.
pub const RATING_PRACTICE: u32 = 9;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-local identifier of a `WordPair`.
///
/// Generated once per record, at creation or when a deck file is parsed,
/// and never reused within a process. Ids are not persisted: reloading a
/// deck produces fresh ids, so an id must never be held across a reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordId(u64);

impl WordId {
	/// Returns a fresh, never-before-returned id.
	fn next() -> Self {
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Which of the two languages is shown first, i.e. which weight field is
/// authoritative for the current session.
///
/// The direction is owned by the presentation layer and passed explicitly
/// into every weight-sensitive call; the core never remembers the last
/// direction between calls.
///
/// Side A is the `portuguese` wire field of the deck schema, side B the
/// `english` one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// Side A is shown first; `weight_pt_to_en` is the active weight.
	AToB,
	/// Side B is shown first; `weight_en_to_pt` is the active weight.
	BToA,
}

impl Direction {
	/// Returns the opposite direction.
	pub fn flipped(self) -> Self {
		match self {
			Direction::AToB => Direction::BToA,
			Direction::BToA => Direction::AToB,
		}
	}
}

/// A bilingual word pair with one familiarity weight per direction.
///
/// # Responsibilities
/// - Hold the two language forms and their per-direction weights
/// - Resolve the active weight and the front/back text for a `Direction`
///
/// # Invariants
/// - `text_a` and `text_b` are non-empty
/// - Weights are non-negative by construction (`u32`)
/// - `weight == 0` in a direction means "known" in that direction
///
/// Equality is deliberately not derived: records are identified by
/// `WordId`, never by structural comparison.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordPair {
	/// Process-local identity, regenerated on every load.
	#[serde(skip, default = "WordId::next")]
	id: WordId,
	/// Language form A (shown first in direction A→B).
	#[serde(rename = "portuguese")]
	text_a: String,
	/// Language form B.
	#[serde(rename = "english")]
	text_b: String,
	/// Sampling weight when direction A→B is active.
	#[serde(rename = "weight_pt_to_en")]
	weight_a_to_b: u32,
	/// Sampling weight when direction B→A is active.
	#[serde(rename = "weight_en_to_pt")]
	weight_b_to_a: u32,
}

impl WordPair {
	/// Creates a new pair rated "needs practice" in both directions,
	/// matching the default weight given to newly added deck entries.
	pub fn new(text_a: &str, text_b: &str) -> Self {
		Self {
			id: WordId::next(),
			text_a: text_a.to_owned(),
			text_b: text_b.to_owned(),
			weight_a_to_b: RATING_PRACTICE,
			weight_b_to_a: RATING_PRACTICE,
		}
	}

	/// Process-local identifier of this record.
	pub fn id(&self) -> WordId {
		self.id
	}

	/// Language form A.
	pub fn text_a(&self) -> &str {
		&self.text_a
	}

	/// Language form B.
	pub fn text_b(&self) -> &str {
		&self.text_b
	}

	/// Returns the sampling weight for the given direction.
	pub fn weight(&self, direction: Direction) -> u32 {
		match direction {
			Direction::AToB => self.weight_a_to_b,
			Direction::BToA => self.weight_b_to_a,
		}
	}

	/// Sets the sampling weight for the given direction.
	///
	/// # Visibility
	/// - `pub(crate)`: all mutation goes through `WordStore`, which
	///   persists after every update.
	pub(crate) fn set_weight(&mut self, direction: Direction, rating: u32) {
		match direction {
			Direction::AToB => self.weight_a_to_b = rating,
			Direction::BToA => self.weight_b_to_a = rating,
		}
	}

	/// True if this word is known (weight 0) in the given direction.
	pub fn is_known(&self, direction: Direction) -> bool {
		self.weight(direction) == 0
	}

	/// The text shown first for the given direction.
	pub fn front(&self, direction: Direction) -> &str {
		match direction {
			Direction::AToB => &self.text_a,
			Direction::BToA => &self.text_b,
		}
	}

	/// The text revealed on flip for the given direction.
	pub fn back(&self, direction: Direction) -> &str {
		match direction {
			Direction::AToB => &self.text_b,
			Direction::BToA => &self.text_a,
		}
	}
}
