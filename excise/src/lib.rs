//! Removes a fixed byte sequence from a file.
//!
//! The target is treated as an opaque byte stream: no structure the file may
//! really have (pages, records, checksums) is parsed or respected, so the
//! caller is responsible for the pattern's boundaries lining up with that
//! structure. The whole file is held in memory for the duration of a call,
//! which is fine for the small state stores this was written for and wrong
//! for anything huge.
//!
//! ```no_run
//! use excise::Pattern;
//!
//! let pattern = Pattern::new(b"stale-record".to_vec())?;
//! let removal = excise::remove("state.db", &pattern)?;
//! println!("{} gone", removal.occurrences);
//! # Ok::<(), excise::Error>(())
//! ```

mod error;
mod pattern;
mod scan;

pub use crate::error::{Error, Result};
pub use crate::pattern::Pattern;
pub use crate::scan::{Excision, excise};

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Report returned by [`remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
	/// Non-overlapping occurrences excised from the file.
	pub occurrences: usize,
	/// Byte length of the file after the rewrite.
	pub len: usize,
}

/// Removes every occurrence of `pattern` from the file at `path`.
///
/// Reads the whole file, excises the pattern in a single left-to-right
/// scan (see [`excise`] for the exact match semantics), and rewrites the
/// file in place. Zero occurrences is success, not an error: the file is
/// rewritten unchanged and the report says `0`.
///
/// The rewrite goes through a temporary file in the target's directory
/// followed by a rename, so an interrupted call leaves the previous
/// contents intact rather than a truncated file. The target's permissions
/// survive the rename.
///
/// Two concurrent calls against the same path still race the whole
/// read-scan-write cycle and the last writer wins; callers that need
/// serialization must hold their own exclusive lock around the call.
pub fn remove(path: impl AsRef<Path>, pattern: &Pattern) -> Result<Removal> {
	let path = path.as_ref();
	let data = fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })?;
	debug!(path = %path.display(), len = data.len(), "loaded target file");

	let Excision { bytes, occurrences } = excise(&data, pattern);
	debug!(occurrences, len = bytes.len(), "scan finished");

	write_atomic(path, &bytes)?;
	debug!(path = %path.display(), "target rewritten");

	Ok(Removal { occurrences, len: bytes.len() })
}

/// Writes `bytes` over `path` through a sibling temporary file and a
/// rename. The temporary file must live in the target's directory for the
/// rename to stay on one filesystem.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
	let write_error = |source| Error::Write { path: path.to_owned(), source };

	let directory = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut staged = NamedTempFile::new_in(directory).map_err(write_error)?;

	// A fresh temporary file does not share the target's permissions; copy
	// them over before it replaces the target.
	let permissions = fs::metadata(path).map_err(write_error)?.permissions();
	staged.as_file().set_permissions(permissions).map_err(write_error)?;

	staged.write_all(bytes).map_err(write_error)?;
	staged.persist(path).map_err(|persist| write_error(persist.error))?;
	Ok(())
}
