use memchr::memmem::find_iter;

use crate::pattern::Pattern;

/// Outcome of excising a pattern from a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excision {
	/// Surviving bytes, in their original order.
	pub bytes: Vec<u8>,
	/// Number of non-overlapping matches removed.
	pub occurrences: usize,
}

/// Removes every occurrence of `pattern` from `data` in a single pass.
///
/// Matches are found left to right and never overlap: after a match the
/// scan resumes at the first byte past it, so `aa` occurs twice in `aaaa`
/// (offsets 0 and 2), not three times. The output is never re-scanned, so
/// a pattern that only forms across an excision boundary stays in place.
///
/// The surviving length is always
/// `data.len() - occurrences * pattern.as_bytes().len()`.
pub fn excise(data: &[u8], pattern: &Pattern) -> Excision {
	let needle = pattern.as_bytes();
	let mut bytes = Vec::with_capacity(data.len());
	let mut occurrences = 0;
	let mut tail = 0;
	for offset in find_iter(data, needle) {
		bytes.extend_from_slice(&data[tail..offset]);
		tail = offset + needle.len();
		occurrences += 1;
	}
	bytes.extend_from_slice(&data[tail..]);
	Excision { bytes, occurrences }
}
