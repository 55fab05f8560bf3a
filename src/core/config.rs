//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_LABEL_CAPACITY, MAX_COLUMNS, MAX_HEADER_LINES},
    error::ConfigError,
};

/// Bounds applied to a single sniffing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffConfig {
    /// Detection stops after this many header lines.
    pub max_header_lines: usize,
    /// Numeric fields beyond this are not counted.
    pub max_columns: usize,
    /// Labels materialised per header line; the true count is still reported.
    pub label_capacity: usize,
}

impl SniffConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> SniffConfigBuilder {
        SniffConfigBuilder::new()
    }
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            max_header_lines: MAX_HEADER_LINES,
            max_columns: MAX_COLUMNS,
            label_capacity: DEFAULT_LABEL_CAPACITY,
        }
    }
}

/// Fluent builder; unset bounds fall back to the defaults.
#[derive(Debug, Default)]
pub struct SniffConfigBuilder {
    max_header_lines: Option<usize>,
    max_columns: Option<usize>,
    label_capacity: Option<usize>,
}

impl SniffConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn max_header_lines(mut self, n: usize) -> Self {
        self.max_header_lines = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_columns(mut self, n: usize) -> Self {
        self.max_columns = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn label_capacity(mut self, n: usize) -> Self {
        self.label_capacity = Some(n);
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBound`] when any bound is set to zero.
    pub fn build(self) -> Result<SniffConfig, ConfigError> {
        let defaults = SniffConfig::default();
        let cfg = SniffConfig {
            max_header_lines: self.max_header_lines.unwrap_or(defaults.max_header_lines),
            max_columns: self.max_columns.unwrap_or(defaults.max_columns),
            label_capacity: self.label_capacity.unwrap_or(defaults.label_capacity),
        };
        if cfg.max_header_lines == 0 {
            return Err(ConfigError::ZeroBound("max_header_lines"));
        }
        if cfg.max_columns == 0 {
            return Err(ConfigError::ZeroBound("max_columns"));
        }
        if cfg.label_capacity == 0 {
            return Err(ConfigError::ZeroBound("label_capacity"));
        }
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<SniffConfigBuilder> for Result<SniffConfig, ConfigError> {
    fn from(b: SniffConfigBuilder) -> Self {
        b.build()
    }
}
