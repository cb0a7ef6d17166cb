//! Typed failures for validation and configuration.

use core::fmt;

/// Failures reported by option validation, checked offsets and config parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum MasonryError {
    /// The default column count is zero.
    ZeroColumns,
    /// A strict-policy breakpoint maps to zero columns.
    ZeroBreakpointColumns { threshold: f64 },
    /// A breakpoint threshold is NaN or infinite.
    InvalidThreshold { threshold: f64 },
    /// A margin is negative, NaN or infinite.
    InvalidMargin { margin: f64 },
    /// A column index at or beyond the current column count.
    ColumnOutOfRange { col: usize, columns: u32 },
    /// The options document could not be parsed.
    Config(String),
}

impl fmt::Display for MasonryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(formatter, "column count must be at least 1"),
            Self::ZeroBreakpointColumns { threshold } => {
                write!(formatter, "breakpoint {threshold}px maps to zero columns")
            }
            Self::InvalidThreshold { threshold } => {
                write!(formatter, "breakpoint threshold {threshold} is not finite")
            }
            Self::InvalidMargin { margin } => {
                write!(formatter, "margin {margin} must be a finite, non-negative length")
            }
            Self::ColumnOutOfRange { col, columns } => {
                write!(formatter, "column {col} is out of range for {columns} columns")
            }
            Self::Config(message) => write!(formatter, "invalid masonry options: {message}"),
        }
    }
}

impl std::error::Error for MasonryError {}

impl From<serde_json::Error> for MasonryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
