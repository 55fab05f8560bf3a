//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Sniffs loosely formatted ASCII tables of numbers: how many header lines
//! precede the data, how many numeric columns the rows hold, how many rows
//! there are, and which labels (if any) name the columns.

pub mod cli;
pub mod core;
pub mod sniff;

pub use self::core::{
    config::{SniffConfig, SniffConfigBuilder},
    error::{ConfigError, SniffError},
    fields::{ColumnCount, Field, count_numeric_columns, parse_number, parse_row},
    split::{Pieces, Split, pieces, split},
    stream::{LineStream, MemoryStream, ReaderStream, open_path},
};

pub use sniff::{
    ColumnCountResult, Diagnostic, LabelSet, LabelStyle, TableShape, count_rows, detect_columns,
    extract_labels, extract_labels_with_style, is_sensible_label, sniff, sniff_path,
};

/// Convenience function for in-memory text.  Sniffs `text` with the default
/// bounds.
///
/// # Errors
///
/// None in practice: an in-memory stream cannot fail to read.
pub fn sniff_text(text: &str) -> Result<TableShape, SniffError> {
    let mut stream = MemoryStream::new(text);
    sniff(&mut stream, &SniffConfig::default())
}
