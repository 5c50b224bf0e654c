use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by pattern construction and file rewriting.
#[derive(Debug, Error)]
pub enum Error {
	/// An empty pattern matches at every offset and has no meaningful
	/// occurrence count, so it is rejected outright.
	#[error("pattern must not be empty")]
	EmptyPattern,

	#[error("invalid hex pattern: {0}")]
	InvalidHex(#[from] hex::FromHexError),

	#[error("failed to read pattern file {}: {source}", .path.display())]
	PatternFile { path: PathBuf, source: io::Error },

	#[error("failed to read {}: {source}", .path.display())]
	Read { path: PathBuf, source: io::Error },

	#[error("failed to write {}: {source}", .path.display())]
	Write { path: PathBuf, source: io::Error },
}
