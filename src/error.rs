//! Error types for the tick engine.

use std::fmt;

/// Failures that abort a tick.
///
/// A tick that returns an error has not happened: the caller keeps the
/// previous frame, which the engine never mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    /// The board has a non-positive width or height.
    InvalidDimensions {
        /// Requested board width.
        width: i32,
        /// Requested board height.
        height: i32,
    },
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for TickError {}

/// Result type for tick operations.
pub type TickResult<T> = Result<T, TickError>;
