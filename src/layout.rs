//! Implicit binary tree over a flat array.
//!
//! Node 0 is the root and node `i` has children `2i + 1` and `2i + 2`. A
//! node's covered range `[l, r]` is never stored: every traversal starts at
//! the root with `[0, len - 1]` and splits at [`midpoint`], the same split
//! used at build time, so each node recovers the range it was built with.
//!
//! `4 * len` slots always suffice for a recursion tree of height
//! `ceil(log2 len) + 1`.

use std::ops::{Bound, RangeBounds};

use crate::error::{Result, SegTreeError};

pub(crate) const ROOT: usize = 0;

/// Number of array slots needed for a tree over `len` elements.
#[inline]
pub(crate) fn slot_count(len: usize) -> usize {
    4 * len
}

#[inline]
pub(crate) fn left_child(node: usize) -> usize {
    2 * node + 1
}

#[inline]
pub(crate) fn right_child(node: usize) -> usize {
    2 * node + 2
}

/// Split point of `[l, r]`: the left child covers `[l, mid]`, the right
/// child covers `[mid + 1, r]`.
#[inline]
pub(crate) fn midpoint(l: usize, r: usize) -> usize {
    l + (r - l) / 2
}

/// Number of elements in `[l, r]`.
#[inline]
pub(crate) fn span(l: usize, r: usize) -> usize {
    r - l + 1
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        log::debug!("rejecting index {} for tree of length {}", index, len);
        return Err(SegTreeError::IndexOutOfRange { index, len });
    }
    Ok(())
}

pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<()> {
    if left > right || right >= len {
        log::debug!("rejecting range [{}, {}] for tree of length {}", left, right, len);
        return Err(SegTreeError::InvalidRange { left, right, len });
    }
    Ok(())
}

/// Converts any Rust range into validated inclusive bounds `(left, right)`.
///
/// Empty ranges such as `3..3` are rejected: there is no aggregate of
/// nothing without an identity element.
pub(crate) fn inclusive_bounds(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<(usize, usize)> {
    let left = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let right = match range.end_bound() {
        Bound::Included(&e) => Some(e),
        Bound::Excluded(&e) => e.checked_sub(1),
        Bound::Unbounded => len.checked_sub(1),
    };

    match right {
        Some(right) => {
            check_range(left, right, len)?;
            Ok((left, right))
        }
        None => {
            log::debug!("rejecting empty range ending at 0 for tree of length {}", len);
            Err(SegTreeError::InvalidRange { left, right: 0, len })
        }
    }
}
