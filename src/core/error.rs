//! Centralised error types used across the crate.
//!
//! Only collaborator failures are errors. Anything the heuristics cannot
//! work out degrades to a zero/empty result plus a diagnostic instead.

use std::{error::Error, fmt, io, path::PathBuf};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBound(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBound(x) => write!(f, "configuration bound `{x}` must be > 0"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SniffError {
    /// The source could not be opened at all.
    Open { path: PathBuf, source: io::Error },
    /// Reading or rewinding an open stream failed.
    Io(io::Error),
    Config(ConfigError),
}

impl fmt::Display for SniffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SniffError::Open { path, source } => {
                write!(f, "cannot open '{}': {source}", path.display())
            }
            SniffError::Io(e) => write!(f, "{e}"),
            SniffError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SniffError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SniffError::Open { source, .. } => Some(source),
            SniffError::Io(e) => Some(e),
            SniffError::Config(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for SniffError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for SniffError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
