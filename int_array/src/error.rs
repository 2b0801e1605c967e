//! Errors returned by the fallible array operations.

use thiserror::Error;

/// Result type for array operations.
pub type Result<T> = std::result::Result<T, IntArrayError>;

/// Errors that can occur when accessing or modifying a [`DynamicIntArray`](crate::DynamicIntArray).
///
/// A failed operation never leaves the array partially modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntArrayError {
    /// An index was not less than the length of the array.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// No element equal to the value was found.
    #[error("element {0} not found")]
    NotFound(i64),
}
