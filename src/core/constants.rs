//! A collection of constants.

/// Detection gives up after this many header lines
pub const MAX_HEADER_LINES: usize = 1000;
/// At most this many numeric fields are counted on one line
pub const MAX_COLUMNS: usize = 1000;
/// Bytes of one line a reader keeps; the rest of an over-long line is skipped
pub const MAX_LINE_BYTES: u64 = 1 << 20;
/// Labels kept per header line unless the caller asks for more
pub const DEFAULT_LABEL_CAPACITY: usize = 64;

/// Column count the detector starts from; no real line can produce it.
pub const START_SENTINEL: i64 = -100;
/// Column count recorded for a blank line.
///
/// Distinct from zero so a blank line never looks like a stable data row.
pub const BLANK_LINE: i64 = -1;

/// Separator used by the whitespace-column label style
pub const COLUMN_GAP: &str = "  ";
/// Characters stripped from every accepted label
pub const LABEL_PUNCTUATION: &[char] = &[',', '[', ']'];
/// Characters that close an enumeration prefix such as `1)` or `2.`
pub const ENUMERATION_CLOSERS: &[char] = &[')', '.', ':'];
