use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::word_pair::{Direction, WordId, WordPair};
use crate::io::{atomic_write, default_data_path, read_file};

/// File name of the deck under the user data directory.
const DECK_FILE_NAME: &str = "words.json";

/// Bundled default deck.
///
/// Pass it as the seed to `WordStore::open` to reproduce the first-run
/// behavior of the app: the seed is copied to the user-writable location
/// before the first load.
pub const EMBEDDED_DECK: &str = include_str!("../resources/words.json");

/// On-disk shape of the deck file.
///
/// `WordPair` ids are not part of the schema; fresh ids are generated
/// every time the file is parsed.
#[derive(Serialize, Deserialize)]
struct DeckFile {
	words: Vec<WordPair>,
}

/// Durable owner of the word-pair collection; the single source of truth.
///
/// # Responsibilities
/// - Load the collection from the user-writable deck file, seeding it
///   from a bundled default on first run
/// - Persist the full collection, atomically, after every weight update
/// - Locate records by id and apply ratings
///
/// # Invariants
/// - The in-memory collection order matches the persisted order
/// - Every failure at the load/save boundary degrades to a logged no-op
///   or an empty collection; nothing propagates to the caller. A learning
///   app must never crash on a swipe.
pub struct WordStore {
	data_path: PathBuf,
	words: Vec<WordPair>,
}

impl WordStore {
	/// Opens the store backed by the deck file at `data_path`.
	///
	/// # Behavior
	/// - Missing file, seed provided: the seed is written to `data_path`
	///   (atomically) and then parsed.
	/// - Missing file, no seed: empty collection. This is a valid empty
	///   state, not an error.
	/// - Unreadable or malformed file: the broken file is set aside as
	///   `<file>.corrupt`, a warning is logged and the collection starts
	///   empty for this session.
	pub fn open<P: AsRef<Path>>(data_path: P, seed_json: Option<&str>) -> Self {
		let data_path = data_path.as_ref().to_path_buf();
		let words = Self::load(&data_path, seed_json);
		Self { data_path, words }
	}

	/// Opens the store at the platform default location
	/// (`<data dir>/quick-cards/words.json`).
	pub fn open_default(seed_json: Option<&str>) -> Self {
		Self::open(default_data_path(DECK_FILE_NAME), seed_json)
	}

	/// Path of the deck file backing this store.
	pub fn data_path(&self) -> &Path {
		&self.data_path
	}

	/// Read-only snapshot of the collection, in persisted order.
	pub fn words(&self) -> &[WordPair] {
		&self.words
	}

	/// Number of word pairs in the collection.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// True if the collection holds no word pairs.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Applies `rating` as the new weight of record `id` for `direction`,
	/// then persists the whole collection.
	///
	/// # Behavior
	/// - Unknown `id` (ex. a reference held across a reload): silent
	///   no-op. A stale reference must never break the interaction flow.
	/// - Persistence failure: logged; the in-memory collection keeps the
	///   new weight and the durable copy stays stale until the next
	///   successful save.
	pub fn update_weight(&mut self, id: WordId, direction: Direction, rating: u32) {
		let Some(word) = self.words.iter_mut().find(|w| w.id() == id) else {
			log::debug!("update_weight: {:?} not in the collection, ignoring", id);
			return;
		};
		word.set_weight(direction, rating);
		self.save();
	}

	/// Fail-soft load of the deck file. Never returns an error.
	fn load(data_path: &Path, seed_json: Option<&str>) -> Vec<WordPair> {
		if !data_path.exists() {
			let Some(seed) = seed_json else {
				log::info!(
					"No deck at {} and no seed available, starting empty",
					data_path.display()
				);
				return Vec::new();
			};
			// First run: install the bundled seed at the writable location
			if let Err(e) = atomic_write(data_path, seed) {
				// The session still runs from the in-memory seed; only
				// durability is lost until the first successful save
				log::warn!("Failed to install seed deck at {}: {}", data_path.display(), e);
			}
			return Self::parse(data_path, seed);
		}

		match read_file(data_path) {
			Ok(contents) => Self::parse(data_path, &contents),
			Err(e) => {
				log::warn!("Failed to read deck {}: {}", data_path.display(), e);
				Self::set_aside(data_path);
				Vec::new()
			}
		}
	}

	/// Parses deck JSON, degrading to an empty collection on a schema or
	/// syntax error.
	fn parse(data_path: &Path, contents: &str) -> Vec<WordPair> {
		match serde_json::from_str::<DeckFile>(contents) {
			Ok(deck) => deck.words,
			Err(e) => {
				log::warn!("Malformed deck {}: {}", data_path.display(), e);
				Self::set_aside(data_path);
				Vec::new()
			}
		}
	}

	/// Renames a broken deck file to `<file>.corrupt` so the next save
	/// cannot overwrite the only copy of the user's data.
	fn set_aside(data_path: &Path) {
		if !data_path.exists() {
			return;
		}
		let mut backup = data_path.as_os_str().to_owned();
		backup.push(".corrupt");
		if let Err(e) = fs::rename(data_path, &backup) {
			log::warn!(
				"Failed to set aside broken deck {}: {}",
				data_path.display(),
				e
			);
		}
	}

	/// Serializes the full collection over the deck file, atomically.
	///
	/// Failures are logged and swallowed: losing one rating update is
	/// preferable to breaking the interaction flow.
	fn save(&self) {
		let deck = DeckFile { words: self.words.clone() };
		let json = match serde_json::to_string_pretty(&deck) {
			Ok(json) => json,
			Err(e) => {
				log::warn!("Failed to serialize deck: {}", e);
				return;
			}
		};
		if let Err(e) = atomic_write(&self.data_path, &json) {
			log::warn!("Failed to save deck {}: {}", self.data_path.display(), e);
		}
	}
}
