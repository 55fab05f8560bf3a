//! Numeric field parsing with zero-allocation float parsing.
//!
//! A line is cut into fields on whitespace and commas. Counting stops at the
//! first field that is not a number, so `1.0 abc 3.0` has one numeric column.

/// One whitespace/comma delimited token, classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Parsed as a real number. NaN lands here too and still counts as present.
    Number(f64),
    NotNumeric,
}

impl Field {
    #[inline]
    #[must_use]
    pub fn parse(token: &str) -> Self {
        parse_number(token).map_or(Self::NotNumeric, Self::Number)
    }

    #[inline]
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Self::Number(v) if v.is_nan())
    }
}

/// Parse a single token as a 64-bit float.
///
/// Accepts the usual decimal/exponent forms, `NaN`/`Inf`, and the Fortran
/// `d` exponent (`1.5d3`, `-2.0D-01`).
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let bytes = token.trim().as_bytes();
    if bytes.is_empty() {
        return None;
    }
    if let Ok(v) = lexical_core::parse::<f64>(bytes) {
        return Some(v);
    }
    if !bytes.iter().any(|b| matches!(b, b'd' | b'D')) {
        return None;
    }
    let swapped: Vec<u8> = bytes
        .iter()
        .map(|&b| if matches!(b, b'd' | b'D') { b'e' } else { b })
        .collect();
    lexical_core::parse::<f64>(&swapped).ok()
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ','
}

/// Fields of a line in order, blanks between separators skipped.
pub fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|t| !t.is_empty())
}

/// Result of counting leading numeric fields on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnCount {
    pub count: usize,
    /// More numeric fields followed than the limit allowed; `count` is clamped.
    pub truncated: bool,
}

/// Count the numeric fields at the start of `line`, up to `limit`.
///
/// Blank lines and lines whose first field is not a number count 0.
#[must_use]
pub fn count_numeric_columns(line: &str, limit: usize) -> ColumnCount {
    let mut count = 0usize;
    for token in fields(line) {
        if !Field::parse(token).is_numeric() {
            break;
        }
        if count == limit {
            return ColumnCount {
                count,
                truncated: true,
            };
        }
        count += 1;
    }
    ColumnCount {
        count,
        truncated: false,
    }
}

/// Parse every leading numeric field of `line`.
///
/// Returns the values plus the byte offset of the first field that failed,
/// or `None` when the whole line parsed.
#[must_use]
pub fn parse_row(line: &str) -> (Vec<f64>, Option<usize>) {
    let base = line.as_ptr() as usize;
    let mut values = Vec::new();
    for token in fields(line) {
        match Field::parse(token) {
            Field::Number(v) => values.push(v),
            Field::NotNumeric => return (values, Some(token.as_ptr() as usize - base)),
        }
    }
    (values, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_COLUMNS;

    fn count(line: &str) -> usize {
        count_numeric_columns(line, MAX_COLUMNS).count
    }

    #[test]
    fn counts_plain_numbers() {
        assert_eq!(count("1.0 2.0 3.0"), 3);
        assert_eq!(count("  -1e3\t+4.5   .5  "), 3);
    }

    #[test]
    fn stops_at_first_non_number() {
        assert_eq!(count("1.0 abc 3.0"), 1);
        assert_eq!(count("abc 1.0"), 0);
    }

    #[test]
    fn blank_lines_count_zero() {
        assert_eq!(count(""), 0);
        assert_eq!(count("   \t  "), 0);
    }

    #[test]
    fn nan_counts_as_present() {
        assert_eq!(count("NaN 2.0"), 2);
        assert!(Field::parse("NaN").is_nan());
        assert!(!Field::parse("2.0").is_nan());
    }

    #[test]
    fn commas_separate_fields() {
        assert_eq!(count("1.0,2.0, 3.0"), 3);
    }

    #[test]
    fn fortran_exponent_parses() {
        assert_eq!(parse_number("1.5d3"), Some(1500.0));
        assert_eq!(parse_number("-2.0D-01"), Some(-0.2));
        assert_eq!(parse_number("dog"), None);
    }

    #[test]
    fn limit_clamps_and_flags() {
        let c = count_numeric_columns("1 2 3 4 5", 3);
        assert_eq!(
            c,
            ColumnCount {
                count: 3,
                truncated: true
            }
        );
        let exact = count_numeric_columns("1 2 3", 3);
        assert!(!exact.truncated);
        assert_eq!(exact.count, 3);
    }

    #[test]
    fn parse_row_reports_stop_position() {
        let (vals, stop) = parse_row("1 2 x 4");
        assert_eq!(vals, [1.0, 2.0]);
        assert_eq!(stop, Some(4));
        let (vals, stop) = parse_row("7,8");
        assert_eq!(vals, [7.0, 8.0]);
        assert_eq!(stop, None);
    }
}
