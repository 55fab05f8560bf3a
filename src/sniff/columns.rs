//! Header length + column count detection.
//!
//! Header lines in scientific text files are not reliably tagged, so the only
//! signal used is the data itself: once two consecutive non-blank lines report
//! the same positive number of numeric fields, the data has started. Every line
//! before that pair is header.

use std::fmt;

use tracing::{debug, warn};

use crate::core::{
    config::SniffConfig,
    constants::{BLANK_LINE, START_SENTINEL},
    error::SniffError,
    fields::count_numeric_columns,
    stream::LineStream,
    text::is_blank,
};

/// Advisory findings from a detection pass. None of these abort detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// `NaN` appeared somewhere in the scanned lines.
    NanValues,
    /// `Inf` appeared somewhere in the scanned lines.
    InfValues,
    /// A line held more numeric fields than the configured limit.
    TooManyColumns { line: usize, limit: usize },
    /// The column count never stabilised.
    NoColumns,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NanValues => f.write_str("NaNs in data"),
            Diagnostic::InfValues => f.write_str("Infs in data"),
            Diagnostic::TooManyColumns { line, limit } => {
                write!(f, "line {line}: more than {limit} columns, extra columns ignored")
            }
            Diagnostic::NoColumns => f.write_str("no columns of real numbers found"),
        }
    }
}

/// Shape of a table as seen by [`detect_columns`].
///
/// A `column_count` of zero means "undetectable"; callers should fall back to
/// treating the source as unlabelled, unstructured text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnCountResult {
    pub header_line_count: usize,
    pub column_count: usize,
    pub saw_nan: bool,
    pub saw_inf: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ColumnCountResult {
    #[inline]
    #[must_use]
    pub fn is_detected(&self) -> bool {
        self.column_count > 0
    }
}

/// Detect the header length and column count of `stream`.
///
/// Reads from the current position (normally the first line) until the column
/// count stabilises, the stream ends, or more than
/// [`SniffConfig::max_header_lines`] header lines have gone by. The stream is
/// rewound before returning, on every path.
///
/// # Errors
///
/// Only read/rewind failures of the stream itself. An undetectable layout is
/// reported as `column_count == 0` plus [`Diagnostic::NoColumns`].
pub fn detect_columns<S: LineStream + ?Sized>(
    stream: &mut S,
    cfg: &SniffConfig,
) -> Result<ColumnCountResult, SniffError> {
    let scanned = scan(stream, cfg);
    let rewound = stream.rewind();
    let result = scanned?;
    rewound?;
    Ok(result)
}

fn scan<S: LineStream + ?Sized>(
    stream: &mut S,
    cfg: &SniffConfig,
) -> Result<ColumnCountResult, SniffError> {
    let mut out = ColumnCountResult::default();
    let line_budget = cfg.max_header_lines.saturating_add(2);

    let mut current = START_SENTINEL;
    let mut consumed = 0usize;
    let mut stable = false;

    while consumed < line_budget {
        let prev = current;
        let Some(line) = stream.next_line()? else {
            break;
        };
        consumed += 1;

        out.saw_nan |= line.contains("NaN");
        out.saw_inf |= line.contains("Inf");

        let blank = is_blank(line);
        current = if blank {
            BLANK_LINE
        } else {
            let cols = count_numeric_columns(line, cfg.max_columns);
            if cols.truncated && !has_too_many(&out.diagnostics) {
                warn!(line = consumed, limit = cfg.max_columns, "column limit reached");
                out.diagnostics.push(Diagnostic::TooManyColumns {
                    line: consumed,
                    limit: cfg.max_columns,
                });
            }
            i64::try_from(cols.count).unwrap_or(i64::MAX)
        };

        if !blank && current > 0 && current == prev {
            stable = true;
            break;
        }
    }

    // the two lines that stabilised the count are data
    out.header_line_count = consumed.saturating_sub(2);
    if stable {
        out.column_count = usize::try_from(current).unwrap_or(0);
    } else {
        warn!(lines = consumed, "no columns of real numbers found");
        out.diagnostics.push(Diagnostic::NoColumns);
    }
    if out.saw_nan {
        warn!("NaNs in data");
        out.diagnostics.push(Diagnostic::NanValues);
    }
    if out.saw_inf {
        warn!("Infs in data");
        out.diagnostics.push(Diagnostic::InfValues);
    }

    debug!(
        header_lines = out.header_line_count,
        columns = out.column_count,
        "column detection finished"
    );
    Ok(out)
}

#[inline]
fn has_too_many(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::TooManyColumns { .. }))
}
