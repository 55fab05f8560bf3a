//! One-shot table sniffing: shape, row count and labels from one stream.

use std::{borrow::Cow, path::Path};

use tracing::debug;

use crate::{
    core::{
        config::SniffConfig,
        error::SniffError,
        stream::{LineStream, open_path},
        text::is_blank,
    },
    sniff::{
        columns::{ColumnCountResult, detect_columns},
        labels::{LabelSet, LabelStyle, extract_labels_with_style},
        rows::count_rows,
    },
};

/// Everything a plotting front end needs to lay out a loosely formatted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    pub columns: ColumnCountResult,
    pub row_count: usize,
    pub labels: LabelSet,
    /// Layout the labels were read from, `None` when there was no candidate.
    pub label_style: Option<LabelStyle>,
}

impl TableShape {
    #[inline]
    #[must_use]
    pub fn header_line_count(&self) -> usize {
        self.columns.header_line_count
    }

    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.column_count
    }

    /// Label for column `index` (0-based), falling back to `column N`.
    #[must_use]
    pub fn column_name(&self, index: usize) -> Cow<'_, str> {
        match self.labels.get(index) {
            Some(label) if !label.is_empty() => Cow::Borrowed(label),
            _ => Cow::Owned(format!("column {}", index + 1)),
        }
    }
}

/// Work out header length, column count, row count and labels of `stream`.
///
/// The label candidate is the last non-blank header line. An undetectable
/// layout yields zero columns, zero rows and no labels. The stream is rewound
/// on return.
///
/// # Errors
///
/// Only read/rewind failures of the stream itself.
pub fn sniff<S: LineStream + ?Sized>(
    stream: &mut S,
    cfg: &SniffConfig,
) -> Result<TableShape, SniffError> {
    let columns = detect_columns(stream, cfg)?;
    let mut shape = TableShape {
        columns,
        row_count: 0,
        labels: LabelSet::with_capacity(cfg.label_capacity),
        label_style: None,
    };
    if !shape.columns.is_detected() {
        return Ok(shape);
    }

    let header = shape.columns.header_line_count;
    let measured = measure(stream, header, cfg.label_capacity, &mut shape);
    let rewound = stream.rewind();
    measured?;
    rewound?;

    debug!(
        header_lines = header,
        columns = shape.column_count(),
        rows = shape.row_count,
        labels = shape.labels.count,
        "table sniffed"
    );
    Ok(shape)
}

/// Open `path` and [`sniff`] it.
///
/// # Errors
///
/// [`SniffError::Open`] when the file cannot be opened, otherwise as [`sniff`].
pub fn sniff_path(path: impl AsRef<Path>, cfg: &SniffConfig) -> Result<TableShape, SniffError> {
    let mut stream = open_path(path)?;
    sniff(&mut stream, cfg)
}

/// Row count and labels; leaves the cursor wherever it stopped.
fn measure<S: LineStream + ?Sized>(
    stream: &mut S,
    header: usize,
    label_capacity: usize,
    shape: &mut TableShape,
) -> Result<(), SniffError> {
    shape.row_count = count_rows(stream, header)?;
    stream.rewind()?;
    if let Some(candidate) = last_header_line(stream, header)? {
        let (style, labels) = extract_labels_with_style(&candidate, label_capacity);
        shape.label_style = style;
        shape.labels = labels;
    }
    Ok(())
}

fn last_header_line<S: LineStream + ?Sized>(
    stream: &mut S,
    header_line_count: usize,
) -> Result<Option<String>, SniffError> {
    let mut last = None;
    for _ in 0..header_line_count {
        let Some(line) = stream.next_line()? else {
            break;
        };
        if !is_blank(line) {
            last = Some(line.to_owned());
        }
    }
    Ok(last)
}
