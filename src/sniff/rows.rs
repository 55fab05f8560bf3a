//! Data row counting below a known header.

use tracing::debug;

use crate::core::{error::SniffError, fields::count_numeric_columns, stream::LineStream};

/// Skip `header_line_count` lines from the current position, then count the
/// rows that follow.
///
/// A row counts while its first field parses as a number; the first blank or
/// text line ends the table, as does the end of the stream. The stream is
/// left wherever counting stopped.
///
/// # Errors
///
/// Propagates read failures of the stream.
pub fn count_rows<S: LineStream + ?Sized>(
    stream: &mut S,
    header_line_count: usize,
) -> Result<usize, SniffError> {
    for _ in 0..header_line_count {
        if stream.next_line()?.is_none() {
            return Ok(0);
        }
    }

    let mut rows = 0usize;
    while let Some(line) = stream.next_line()? {
        // only the first field decides
        if count_numeric_columns(line, 1).count == 0 {
            break;
        }
        rows += 1;
    }
    debug!(rows, "row count finished");
    Ok(rows)
}
