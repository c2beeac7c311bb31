use rand::Rng;
use rand::prelude::IteratorRandom;

use super::word_pair::{Direction, WordPair};

/// Selects the next word to show using weighted random sampling.
///
/// The probability of selecting a word is proportional to its weight for
/// `direction`: word `i` is chosen with probability `w_i / total` when
/// `total > 0`.
///
/// # Behavior
/// - Returns `None` for an empty collection.
/// - If every weight for `direction` is 0 (everything already rated
///   known), falls back to a uniform draw over all records so familiar
///   material still resurfaces and the deck never stalls.
/// - Otherwise draws a point in `[0, total)` and walks the cumulative
///   weights in collection order.
pub fn pick_random<'a>(words: &'a [WordPair], direction: Direction) -> Option<&'a WordPair> {
	if words.is_empty() {
		return None;
	}

	// Compute the total weight for this direction
	let total: u64 = words.iter().map(|w| u64::from(w.weight(direction))).sum();
	if total == 0 {
		// Everything is known in this direction: uniform fallback
		return words.iter().choose(&mut rand::rng());
	}

	// Randomly select a word
	let mut r = rand::rng().random_range(0..total);

	let mut fallback: Option<&WordPair> = None;
	for word in words {
		let weight = u64::from(word.weight(direction));
		if r < weight {
			return Some(word);
		}
		r -= weight;
		fallback = Some(word);
	}

	// Fallback: should not happen, but kept for safety.
	fallback
}

/// Returns the words already rated known (weight 0) for `direction`.
///
/// Collection order is preserved. The result is eagerly materialized and
/// the call has no side effects, so calling it twice over an unchanged
/// collection yields identical results.
pub fn known_words<'a>(words: &'a [WordPair], direction: Direction) -> Vec<&'a WordPair> {
	words.iter().filter(|w| w.is_known(direction)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::word_pair::{RATING_KNOWN, RATING_PRACTICE};
	use std::collections::HashMap;

	fn pair(text_a: &str, text_b: &str, weight_a_to_b: u32, weight_b_to_a: u32) -> WordPair {
		let mut pair = WordPair::new(text_a, text_b);
		pair.set_weight(Direction::AToB, weight_a_to_b);
		pair.set_weight(Direction::BToA, weight_b_to_a);
		pair
	}

	/// The two-record deck used by the concrete scenarios: "casa" still
	/// needs practice in A→B, "gato" is already known there.
	fn casa_gato() -> Vec<WordPair> {
		vec![pair("casa", "house", 5, 0), pair("gato", "cat", 0, 3)]
	}

	#[test]
	fn empty_collection_yields_none() {
		assert!(pick_random(&[], Direction::AToB).is_none());
		assert!(pick_random(&[], Direction::BToA).is_none());
	}

	#[test]
	fn zero_weight_words_are_never_drawn_while_total_is_positive() {
		let words = casa_gato();

		// "gato" has weight 0 in A→B and total > 0, so the uniform
		// fallback does not apply: "casa" must be drawn every time
		for _ in 0..10_000 {
			let picked = pick_random(&words, Direction::AToB).unwrap();
			assert_eq!(picked.text_a(), "casa");
		}
	}

	#[test]
	fn draw_frequency_is_proportional_to_weight() {
		let words = vec![
			pair("um", "one", 1, 0),
			pair("dois", "two", 3, 0),
			pair("tres", "three", 6, 0),
		];

		let trials = 20_000;
		let mut counts: HashMap<String, u32> = HashMap::new();
		for _ in 0..trials {
			let picked = pick_random(&words, Direction::AToB).unwrap();
			*counts.entry(picked.text_a().to_owned()).or_insert(0) += 1;
		}

		// Expected frequencies: 10%, 30%, 60%, with a wide tolerance to
		// keep the test stable
		let um = counts["um"] as f64 / trials as f64;
		let dois = counts["dois"] as f64 / trials as f64;
		let tres = counts["tres"] as f64 / trials as f64;
		assert!((um - 0.1).abs() < 0.04, "um drawn with frequency {um}");
		assert!((dois - 0.3).abs() < 0.04, "dois drawn with frequency {dois}");
		assert!((tres - 0.6).abs() < 0.04, "tres drawn with frequency {tres}");
	}

	#[test]
	fn all_known_falls_back_to_uniform_choice() {
		let words = vec![pair("casa", "house", 0, 0), pair("gato", "cat", 0, 0)];

		let trials = 10_000;
		let mut casa_count = 0;
		for _ in 0..trials {
			let picked = pick_random(&words, Direction::AToB).unwrap();
			if picked.text_a() == "casa" {
				casa_count += 1;
			}
		}

		// Each record should appear roughly half of the time
		assert!(
			(4_000..=6_000).contains(&casa_count),
			"casa drawn {casa_count} times out of {trials}"
		);
	}

	#[test]
	fn marking_the_last_word_known_triggers_the_uniform_fallback() {
		let mut words = casa_gato();

		// Rate "casa" as known: every A→B weight is now 0
		words[0].set_weight(Direction::AToB, RATING_KNOWN);

		let trials = 10_000;
		let mut casa_count = 0;
		for _ in 0..trials {
			let picked = pick_random(&words, Direction::AToB).unwrap();
			if picked.text_a() == "casa" {
				casa_count += 1;
			}
		}

		assert!(
			(4_000..=6_000).contains(&casa_count),
			"casa drawn {casa_count} times out of {trials}"
		);
	}

	#[test]
	fn directions_use_their_own_weights() {
		let words = casa_gato();

		// In B→A only "gato" carries weight
		for _ in 0..1_000 {
			let picked = pick_random(&words, Direction::BToA).unwrap();
			assert_eq!(picked.text_a(), "gato");
		}
	}

	#[test]
	fn known_words_filters_by_direction_and_keeps_order() {
		let words = vec![
			pair("casa", "house", 5, 0),
			pair("gato", "cat", 0, 3),
			pair("livro", "book", 0, 0),
		];

		let known_a = known_words(&words, Direction::AToB);
		let texts: Vec<&str> = known_a.iter().map(|w| w.text_a()).collect();
		assert_eq!(texts, vec!["gato", "livro"]);

		let known_b = known_words(&words, Direction::BToA);
		let texts: Vec<&str> = known_b.iter().map(|w| w.text_a()).collect();
		assert_eq!(texts, vec!["casa", "livro"]);
	}

	#[test]
	fn known_words_is_idempotent_without_mutation() {
		let words = casa_gato();

		let first: Vec<_> = known_words(&words, Direction::AToB)
			.iter()
			.map(|w| w.id())
			.collect();
		let second: Vec<_> = known_words(&words, Direction::AToB)
			.iter()
			.map(|w| w.id())
			.collect();
		assert_eq!(first, second);
	}

	#[test]
	fn rating_moves_a_word_in_and_out_of_the_known_set() {
		let mut words = casa_gato();

		words[0].set_weight(Direction::AToB, RATING_KNOWN);
		let known: Vec<&str> = known_words(&words, Direction::AToB)
			.iter()
			.map(|w| w.text_a())
			.collect();
		assert_eq!(known, vec!["casa", "gato"]);

		words[0].set_weight(Direction::AToB, RATING_PRACTICE);
		let known: Vec<&str> = known_words(&words, Direction::AToB)
			.iter()
			.map(|w| w.text_a())
			.collect();
		assert_eq!(known, vec!["gato"]);
	}
}
