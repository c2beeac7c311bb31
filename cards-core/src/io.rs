use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, io};

use tempfile::NamedTempFile;

/// Directory created under the platform data directory for the deck file.
const APP_DIR_NAME: &str = "quick-cards";

/// Resolves the default user-writable location for `file_name`.
///
/// - Uses the platform data directory (ex. `~/.local/share` on Linux,
///   `~/Library/Application Support` on macOS)
/// - Falls back to the current working directory if the platform does not
///   report one
pub(crate) fn default_data_path(file_name: &str) -> PathBuf {
	match dirs::data_dir() {
		Some(dir) => dir.join(APP_DIR_NAME).join(file_name),
		None => PathBuf::from(file_name),
	}
}

/// Reads a whole file as UTF-8 text.
pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
	fs::read_to_string(path)
}

/// Writes `contents` to `path` atomically.
///
/// # Behavior
/// - Creates the parent directory if missing.
/// - Writes to a temporary file in the destination directory, then
///   renames it over `path`. A crash mid-write leaves either the previous
///   file or the new one on disk, never a partial write.
///
/// # Errors
/// Returns an error if the directory cannot be created, the temporary
/// file cannot be written, or the rename fails.
pub(crate) fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
	let parent = path.parent().unwrap_or_else(|| Path::new("."));
	fs::create_dir_all(parent)?;

	// The temporary file must live in the destination directory so the
	// final rename never crosses a filesystem boundary
	let mut temp_file = NamedTempFile::new_in(parent)?;
	temp_file.write_all(contents.as_bytes())?;
	temp_file.persist(path)?;

	Ok(())
}
