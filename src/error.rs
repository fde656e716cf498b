//! Failure kinds for list operations.

use thiserror::Error;

/// Error value returned by the fallible list operations.
///
/// Every failure is detected before any element is moved, so a call that
/// returns an error leaves the list unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A strict-validation accessor (`get`, `get_mut`, `set`, `pop`) was
    /// given an index outside `[-len, len - 1]`.
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending logical index.
        index: isize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// `slice` was called with a step of zero.
    #[error("slice step cannot be zero")]
    InvalidStep,

    /// `remove` or `index` did not find the value in the scanned range.
    #[error("value not in list")]
    ValueNotFound,

    /// `max` or `min` on an empty list.
    #[error("{op} of empty list")]
    Empty {
        /// The operation that required a non-empty list.
        op: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
