//! Error type for square construction and slot manipulation.

use thiserror::Error;

/// Errors raised synchronously by [`crate::Square`] operations.
///
/// Only construction and `swap_points` can fail; every other operation on an
/// already-valid square is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Fewer than four points were supplied to the constructor.
    #[error("a square needs 4 points, got {got}")]
    InvalidArity { got: usize },

    /// The first four points do not form a square in canonical slot order.
    #[error("point ordering is invalid and will not form a square")]
    InvalidShape,

    /// A slot index passed to `swap_points` is outside `0..=3`.
    #[error("both indices must be between 0 and 3 inclusive (got {i} and {j})")]
    IndexOutOfRange { i: usize, j: usize },
}
