//! Delimiter splitting into a bounded result.
//!
//! Splits keep counting past `capacity`, so the caller can tell how many
//! pieces the text really held even though only the first `capacity` are
//! materialised.

/// Pieces produced by [`split`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    /// At most `capacity` pieces, in order.
    pub parts: Vec<String>,
    /// Pieces found, including the ones past capacity.
    pub total: usize,
}

impl Split {
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.parts.len()
    }
}

/// Lazy pieces of `text` split on `delim`; see [`split`] for the rules.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    text: &'a str,
    delim: &'a str,
    offset: usize,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text = self.text;
        if self.offset > 0 {
            let rest = &text[self.offset..];
            self.offset += rest.len() - rest.trim_start_matches(' ').len();
        }
        if self.offset >= text.len() {
            return None;
        }
        let rest = &text[self.offset..];
        let found = if self.delim.is_empty() {
            None
        } else {
            rest.find(self.delim)
        };
        let (piece, advance) = match found {
            Some(pos) => (&rest[..pos], pos + self.delim.len()),
            None => (rest, rest.len()),
        };
        self.offset += advance;
        Some(piece)
    }
}

/// Iterate the pieces of `text` without materialising them.
#[must_use]
pub fn pieces<'a>(text: &'a str, delim: &'a str) -> Pieces<'a> {
    Pieces {
        text: text.trim_end(),
        delim,
        offset: 0,
    }
}

/// Split `text` on `delim`.
///
/// * Spaces before each piece are skipped, except at the very start of the
///   text, so a run of spaces after a delimiter is absorbed by it. This is
///   what lets a two-space `delim` split on gaps of any width.
/// * Trailing whitespace of `text` is ignored and never yields a final
///   empty piece.
/// * The delimiter itself is excluded from every piece.
/// * An empty `delim` yields the whole (right-trimmed) text as one piece.
#[must_use]
pub fn split(text: &str, delim: &str, capacity: usize) -> Split {
    let mut out = Split::default();
    for piece in pieces(text, delim) {
        out.total += 1;
        if out.parts.len() < capacity {
            out.parts.push(piece.to_owned());
        }
    }
    out
}
