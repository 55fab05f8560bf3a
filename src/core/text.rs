//! Small string helpers shared by the label extractor.

/// True when `s` holds nothing but whitespace.
#[inline]
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Copy of `s` with every char in `set` removed.
#[must_use]
pub fn delete_chars(s: &str, set: &[char]) -> String {
    s.chars().filter(|c| !set.contains(c)).collect()
}

/// Drop a leading enumeration such as `1)`, `12.` or `3:` and re-trim.
///
/// Only the digit run is mandatory; the closer is removed when present.
/// Text that is digits and nothing else is returned unchanged.
#[must_use]
pub fn strip_enumeration<'a>(s: &'a str, closers: &[char]) -> &'a str {
    let s = s.trim();
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == s.len() || rest.trim().is_empty() {
        return s;
    }
    let rest = rest.trim_start();
    rest.strip_prefix(closers).unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSERS: &[char] = &[')', '.', ':'];

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn deletes_listed_chars() {
        assert_eq!(delete_chars("[ mass, ]", &[',', '[', ']']), " mass ");
    }

    #[test]
    fn strips_enumeration_prefixes() {
        assert_eq!(strip_enumeration("1) mass", CLOSERS), "mass");
        assert_eq!(strip_enumeration(" 12. density ", CLOSERS), "density");
        assert_eq!(strip_enumeration("3 x", CLOSERS), "x");
        assert_eq!(strip_enumeration("2nd moment", CLOSERS), "nd moment");
    }

    #[test]
    fn leaves_unenumerated_text_alone() {
        assert_eq!(strip_enumeration("mass", CLOSERS), "mass");
        assert_eq!(strip_enumeration("42", CLOSERS), "42");
        assert_eq!(strip_enumeration("x1", CLOSERS), "x1");
    }
}
