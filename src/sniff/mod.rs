//! Table sniffing: header/column detection, row counting, label recovery.

pub mod columns;
pub mod labels;
pub mod report;
pub mod rows;

pub use columns::{ColumnCountResult, Diagnostic, detect_columns};
pub use labels::{LabelSet, LabelStyle, extract_labels, extract_labels_with_style, is_sensible_label};
pub use report::{TableShape, sniff, sniff_path};
pub use rows::count_rows;
