use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_LABEL_CAPACITY, MAX_COLUMNS, MAX_HEADER_LINES};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-sniff",
    version,
    about = "Work out the header, columns and labels of loosely formatted numeric text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report header length, column count, row count and labels of a file
    Sniff(SniffArgs),
    /// Extract column labels from a single header line
    Labels(LabelsArgs),
    /// Count the leading numeric fields of a single line
    Columns(ColumnsArgs),
}

/// Detection bounds shared by the subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct BoundsArgs {
    /// Give up after this many header lines
    #[arg(long, default_value_t = MAX_HEADER_LINES)]
    pub max_header_lines: usize,

    /// Stop counting numeric fields past this many
    #[arg(long, default_value_t = MAX_COLUMNS)]
    pub max_columns: usize,

    /// Keep at most this many labels
    #[arg(long, default_value_t = DEFAULT_LABEL_CAPACITY)]
    pub label_capacity: usize,
}

/// `ascii-sniff sniff …`
#[derive(Parser, Debug)]
pub struct SniffArgs {
    /// Data file (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `ascii-sniff labels …`
#[derive(Parser, Debug)]
pub struct LabelsArgs {
    /// Header line, e.g. "# [ time ] [ x ]"
    #[arg(value_name = "LINE", allow_hyphen_values = true)]
    pub line: String,

    #[arg(long, default_value_t = DEFAULT_LABEL_CAPACITY)]
    pub label_capacity: usize,
}

/// `ascii-sniff columns …`
#[derive(Parser, Debug)]
pub struct ColumnsArgs {
    /// Data line, e.g. "1.0 2.0 3.0"
    #[arg(value_name = "LINE", allow_hyphen_values = true)]
    pub line: String,

    #[arg(long, default_value_t = MAX_COLUMNS)]
    pub max_columns: usize,
}
