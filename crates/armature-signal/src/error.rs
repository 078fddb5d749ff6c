//! Error types for armature-signal.

use thiserror::Error;

/// Result type for armature-signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur when constructing or combining signal values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Requested width is zero or wider than the packed storage supports.
    #[error("bit width {0} outside supported range 1..={max}", max = crate::MAX_WIDTH)]
    WidthOutOfRange(usize),

    /// Two signals of different widths were combined.
    #[error("width mismatch: expected {expected} bits, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}
