//! Aggregates the primitives layer: streams, fields, splitting, config.

pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod split;
pub mod stream;
pub mod text;

// re-export frequently-used items for convenience
pub use config::{SniffConfig, SniffConfigBuilder};
pub use constants::{DEFAULT_LABEL_CAPACITY, MAX_COLUMNS, MAX_HEADER_LINES};
pub use error::{ConfigError, SniffError};
pub use fields::{ColumnCount, Field, count_numeric_columns, parse_number, parse_row};
pub use split::{Pieces, Split, pieces, split};
pub use stream::{LineStream, MemoryStream, ReaderStream, open_path};
