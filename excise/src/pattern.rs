use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A non-empty byte sequence to excise, matched exactly.
///
/// No wildcards, no regular-expression semantics, no encoding awareness:
/// the pattern is compared byte for byte against the target. Emptiness is
/// rejected at construction, so every `Pattern` in circulation has at least
/// one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
	bytes: Vec<u8>,
}

impl Pattern {
	/// Builds a pattern from raw bytes.
	pub fn new(bytes: Vec<u8>) -> Result<Self> {
		if bytes.is_empty() {
			return Err(Error::EmptyPattern);
		}
		Ok(Self { bytes })
	}

	/// Builds a pattern from hex digits such as `"deadbeef"`.
	///
	/// Whitespace anywhere in the text is ignored, so pairs copied out of a
	/// hex dump (`"de ad be ef"`) decode as written. Case does not matter.
	pub fn from_hex(text: &str) -> Result<Self> {
		let digits = text
			.chars()
			.filter(|c| !c.is_ascii_whitespace())
			.collect::<String>();
		Self::new(hex::decode(digits)?)
	}

	/// Builds a pattern from the raw contents of the file at `path`.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = fs::read(path).map_err(|source| Error::PatternFile {
			path: path.to_owned(),
			source,
		})?;
		Self::new(bytes)
	}

	/// The pattern bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}
}

impl AsRef<[u8]> for Pattern {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::Pattern;
	use crate::error::Error;

	#[test]
	fn keeps_raw_bytes_as_given() {
		let pattern = Pattern::new(vec![0x00, 0x9f, 0x92, 0x96]).unwrap();
		assert_eq!(pattern.as_bytes(), [0x00, 0x9f, 0x92, 0x96]);
	}

	#[test]
	fn rejects_empty_bytes() {
		assert!(matches!(Pattern::new(Vec::new()), Err(Error::EmptyPattern)));
	}

	#[test]
	fn decodes_hex_digits() {
		let pattern = Pattern::from_hex("deadbeef").unwrap();
		assert_eq!(pattern.as_bytes(), [0xde, 0xad, 0xbe, 0xef]);
	}

	#[test]
	fn hex_ignores_case_and_whitespace() {
		let pattern = Pattern::from_hex("DE ad\nBE\tef").unwrap();
		assert_eq!(pattern.as_bytes(), [0xde, 0xad, 0xbe, 0xef]);
	}

	#[test]
	fn hex_whitespace_stripping_is_not_pair_aware() {
		let pattern = Pattern::from_hex("d e").unwrap();
		assert_eq!(pattern.as_bytes(), [0xde]);
	}

	#[test]
	fn rejects_odd_hex_length() {
		assert!(matches!(Pattern::from_hex("abc"), Err(Error::InvalidHex(_))));
	}

	#[test]
	fn rejects_non_hex_digits() {
		assert!(matches!(Pattern::from_hex("zz"), Err(Error::InvalidHex(_))));
	}

	#[test]
	fn blank_hex_is_an_empty_pattern() {
		assert!(matches!(Pattern::from_hex(""), Err(Error::EmptyPattern)));
		assert!(matches!(Pattern::from_hex(" \n\t"), Err(Error::EmptyPattern)));
	}

	#[test]
	fn reads_pattern_bytes_from_a_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("needle.bin");
		std::fs::write(&path, b"\x00binary\xff").unwrap();

		let pattern = Pattern::from_file(&path).unwrap();
		assert_eq!(pattern.as_bytes(), b"\x00binary\xff");
	}

	#[test]
	fn missing_pattern_file_is_its_own_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = Pattern::from_file(dir.path().join("absent.bin"));
		assert!(matches!(result, Err(Error::PatternFile { .. })));
	}

	#[test]
	fn empty_pattern_file_is_an_empty_pattern() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("empty.bin");
		std::fs::write(&path, b"").unwrap();

		assert!(matches!(Pattern::from_file(&path), Err(Error::EmptyPattern)));
	}
}
