//! Column label recovery from a single header line.
//!
//! Three layouts are recognised, tried in this order:
//! * `Bracketed` - `# [ mass ] [ x ] [ y ]`, split on `]`, no filtering
//! * `CommaList` - `mass, x, y`, split on `,`, numbers dropped
//! * `Columns`   - `#   mass     x     y`, split on gaps of 2+ spaces, numbers dropped
//!
//! The order matters: a bracketed line containing commas is still bracketed.

use tracing::debug;

use crate::core::{
    constants::{COLUMN_GAP, ENUMERATION_CLOSERS, LABEL_PUNCTUATION, MAX_COLUMNS},
    fields::parse_number,
    split::pieces,
    text::{delete_chars, strip_enumeration},
};

/// Header layout a label set was recovered from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelStyle {
    Bracketed,
    CommaList,
    Columns,
}

impl LabelStyle {
    /// Tried first to last; the first that applies wins.
    pub const CASCADE: [Self; 3] = [Self::Bracketed, Self::CommaList, Self::Columns];

    /// Does `text` (the label part of the line) look like this layout?
    #[must_use]
    pub fn applies(self, text: &str) -> bool {
        match self {
            Self::Bracketed => text.contains(']'),
            Self::CommaList => text.find(',').is_some_and(|pos| pos > 0),
            Self::Columns => !text.is_empty(),
        }
    }

    #[must_use]
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bracketed => "]",
            Self::CommaList => ",",
            Self::Columns => COLUMN_GAP,
        }
    }

    /// Whether pieces must pass [`is_sensible_label`].
    #[must_use]
    pub fn filtered(self) -> bool {
        !matches!(self, Self::Bracketed)
    }

    #[must_use]
    pub fn select(text: &str) -> Option<Self> {
        Self::CASCADE.into_iter().find(|s| s.applies(text))
    }
}

/// Labels found on one line, stored up to a fixed capacity.
///
/// `count` is authoritative: when it exceeds `capacity` only the first
/// `capacity` labels are kept in `labels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub count: usize,
    pub labels: Vec<String>,
    pub capacity: usize,
}

impl LabelSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            labels: Vec::with_capacity(capacity.min(MAX_COLUMNS)),
            capacity,
        }
    }

    /// Count `raw`, cleaning and storing it only while there is room.
    fn push_raw(&mut self, raw: &str) {
        self.count += 1;
        if self.labels.len() < self.capacity {
            self.labels.push(clean_label(raw));
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.count > self.labels.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

/// A token is a plausible label unless it is a plain number.
#[inline]
#[must_use]
pub fn is_sensible_label(token: &str) -> bool {
    parse_number(token).is_none()
}

/// Recover column labels from `line`, keeping at most `capacity` of them.
///
/// Never fails: a line with nothing usable gives an empty set.
#[must_use]
pub fn extract_labels(line: &str, capacity: usize) -> LabelSet {
    extract_labels_with_style(line, capacity).1
}

/// As [`extract_labels`], also reporting which layout matched.
#[must_use]
pub fn extract_labels_with_style(line: &str, capacity: usize) -> (Option<LabelStyle>, LabelSet) {
    let text = label_text(line);
    let mut set = LabelSet::with_capacity(capacity);
    let Some(style) = LabelStyle::select(text) else {
        return (None, set);
    };

    for piece in pieces(text, style.delimiter()) {
        if !style.filtered() || is_sensible_label(piece) {
            set.push_raw(piece);
        }
    }

    debug!(?style, count = set.count, "column labels extracted");
    (Some(style), set)
}

/// Part of the line after a leading `#` and after the last `=`.
fn label_text(line: &str) -> &str {
    let lead = line.len() - line.trim_start().len();
    let mut start = if line[lead..].starts_with('#') {
        lead + 1
    } else {
        0
    };
    if let Some(eq) = line.rfind('=') {
        start = start.max(eq + 1);
    }
    line[start..].trim_start()
}

fn clean_label(raw: &str) -> String {
    let stripped = delete_chars(raw, LABEL_PUNCTUATION);
    // bracketed numeric labels such as `[ 2.5 ]` are not enumerations
    if parse_number(&stripped).is_some() {
        return stripped.trim().to_owned();
    }
    strip_enumeration(&stripped, ENUMERATION_CLOSERS).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(line: &str) -> Vec<String> {
        extract_labels(line, 16).labels
    }

    #[test]
    fn bracketed_labels() {
        let set = extract_labels("# [ mass ] [ x ] [ y ]", 16);
        assert_eq!(set.labels, ["mass", "x", "y"]);
        assert_eq!(set.count, 3);
    }

    #[test]
    fn bracketed_keeps_numeric_labels() {
        assert_eq!(labels("# [ 1 ] [ 2.5 ]"), ["1", "2.5"]);
    }

    #[test]
    fn bracket_wins_over_comma() {
        let (style, set) = extract_labels_with_style("# [x, cm] [y, cm]", 16);
        assert_eq!(style, Some(LabelStyle::Bracketed));
        assert_eq!(set.labels, ["x cm", "y cm"]);
    }

    #[test]
    fn comma_list_drops_numbers() {
        let set = extract_labels("mass,1.0,x,y", 16);
        assert_eq!(set.labels, ["mass", "x", "y"]);
        assert_eq!(set.count, 3);
    }

    #[test]
    fn leading_comma_is_not_a_comma_list() {
        let (style, _) = extract_labels_with_style(",a  b", 16);
        assert_eq!(style, Some(LabelStyle::Columns));
    }

    #[test]
    fn whitespace_columns_with_enumeration() {
        let (style, set) = extract_labels_with_style("#     1) mass     2) x", 16);
        assert_eq!(style, Some(LabelStyle::Columns));
        assert_eq!(set.labels, ["mass", "x"]);
    }

    #[test]
    fn whitespace_columns_drop_numbers() {
        assert_eq!(labels("#  time   12.5   energy"), ["time", "energy"]);
    }

    #[test]
    fn single_spaces_stay_inside_a_label() {
        assert_eq!(labels("# x position   y position"), ["x position", "y position"]);
    }

    #[test]
    fn text_after_last_equals_sign() {
        assert_eq!(labels("# units = [ cm ] [ s ]"), ["cm", "s"]);
        assert_eq!(labels("a = b = c,d"), ["c", "d"]);
    }

    #[test]
    fn empty_and_bare_comment_lines() {
        let (style, set) = extract_labels_with_style("", 16);
        assert_eq!(style, None);
        assert!(set.is_empty());
        assert!(extract_labels("#   ", 16).is_empty());
    }

    #[test]
    fn all_numeric_line_has_no_labels() {
        let set = extract_labels("1.0  2.0  3.0", 16);
        assert_eq!(set.count, 0);
        assert!(set.labels.is_empty());
    }

    #[test]
    fn capacity_truncates_but_counts() {
        let set = extract_labels("a,b,c,d", 2);
        assert_eq!(set.labels, ["a", "b"]);
        assert_eq!(set.count, 4);
        assert!(set.is_truncated());

        let set = extract_labels("[a] [b] [c]", 1);
        assert_eq!(set.labels, ["a"]);
        assert_eq!(set.count, 3);
        assert_eq!(set.get(0), Some("a"));
        assert_eq!(set.get(1), None);
    }

    #[test]
    fn count_is_exact_past_column_limit() {
        let line = (0..1500).map(|i| format!("c{i}")).collect::<Vec<_>>().join(",");
        let set = extract_labels(&line, 64);
        assert_eq!(set.count, 1500);
        assert_eq!(set.labels.len(), 64);
        assert_eq!(set.get(63), Some("c63"));

        let line = format!(
            "#  {}",
            (0..1200).map(|i| format!("v{i}")).collect::<Vec<_>>().join("   ")
        );
        let (style, set) = extract_labels_with_style(&line, 8);
        assert_eq!(style, Some(LabelStyle::Columns));
        assert_eq!(set.count, 1200);
        assert_eq!(set.labels.len(), 8);
    }

    #[test]
    fn sensibility_filter() {
        assert!(!is_sensible_label(" 3.14 "));
        assert!(!is_sensible_label("1e-3"));
        assert!(is_sensible_label("x"));
        assert!(is_sensible_label("rho [g/cm^3]"));
    }
}
