//! Errors returned by segment tree operations.
//!
//! Every error is a contract violation by the caller. Validation always
//! runs before the tree is touched, so a rejected call leaves the tree
//! exactly as it was.

use thiserror::Error;

/// Error returned when an operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegTreeError {
    /// The initial sequence was empty.
    #[error("cannot build a segment tree from an empty sequence")]
    InvalidInput,
    /// A single-element index fell outside `[0, len)`.
    #[error("index {index} is out of range for a tree of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A range had `left > right`, or a bound outside `[0, len)`.
    #[error("range [{left}, {right}] is invalid for a tree of length {len}")]
    InvalidRange { left: usize, right: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SegTreeError>;
