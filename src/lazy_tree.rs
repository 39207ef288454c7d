//! Lazy segment tree: range sums with range add.
//!
//! Adding a delta to a whole range is O(log n) because a node that is fully
//! covered by the update absorbs the delta into its own sum and records it
//! as *pending* instead of visiting its subtree. The pending delta is only
//! handed down to the two children when a later traversal needs to look
//! below that node.
//!
//! For every node `i` with pending delta `d`:
//!
//! - `nodes[i]` already includes `d * size(i)`;
//! - neither child's sum nor pending slot includes `d`.
//!
//! So `nodes[i] == nodes[left] + nodes[right] + d * size(i)` for internal
//! nodes. Every traversal pushes a node's pending delta down before it
//! compares that node's range against the requested range, which is why
//! even queries take `&mut self`.
//!
//! The aggregate is fixed to addition: scaling a delta by the number of
//! covered elements is what makes a pending delta applicable to a sum
//! without visiting the leaves.

use std::ops::RangeBounds;

use num_traits::Zero;

use crate::error::{Result, SegTreeError};
use crate::layout::{self, ROOT, left_child, midpoint, right_child, span};

/// Element type of a [`LazySegmentTree`].
///
/// `Zero` provides the additive identity, which is also the "nothing
/// pending" marker. `scale(count)` must equal `count` copies of `self`
/// added together.
pub trait RangeAdd: Copy + Zero {
    fn scale(self, count: usize) -> Self;
}

/// `count` copies of `value` added together, by doubling. O(log count).
///
/// Every partial sum and every doubled term has the sign of the result and
/// no larger a magnitude, so this overflows only if the result does.
fn repeated_add<T: Copy + Zero>(value: T, mut count: usize) -> T {
    let mut acc = T::zero();
    let mut term = value;
    loop {
        if count & 1 == 1 {
            acc = acc + term;
        }
        count >>= 1;
        if count == 0 {
            return acc;
        }
        term = term + term;
    }
}

// A count that does not fit in the element type would be truncated by `as`
// (128 becomes -128 in i8), so those spans fall back to doubling.
macro_rules! impl_range_add_int {
    ($($t:ty),*) => {$(
        impl RangeAdd for $t {
            #[inline]
            fn scale(self, count: usize) -> Self {
                match <$t>::try_from(count) {
                    Ok(count) => self * count,
                    Err(_) => repeated_add(self, count),
                }
            }
        }
    )*};
}

macro_rules! impl_range_add_float {
    ($($t:ty),*) => {$(
        impl RangeAdd for $t {
            #[inline]
            fn scale(self, count: usize) -> Self {
                self * count as $t
            }
        }
    )*};
}

impl_range_add_int!(i8, i16, i32, i64, i128, isize);
impl_range_add_int!(u8, u16, u32, u64, u128, usize);
impl_range_add_float!(f32, f64);

/// A sum segment tree supporting "add `delta` to every element in `[l, r]`".
#[derive(Clone, Debug)]
pub struct LazySegmentTree<T> {
    len: usize,
    nodes: Vec<T>,
    pending: Vec<T>,
}

impl<T: RangeAdd> LazySegmentTree<T> {
    /// Build a tree over `values` with nothing pending. O(n).
    ///
    /// Fails with [`SegTreeError::InvalidInput`] if `values` is empty.
    pub fn build(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            log::debug!("rejecting lazy segment tree over an empty sequence");
            return Err(SegTreeError::InvalidInput);
        }

        let len = values.len();
        let slots = layout::slot_count(len);
        let mut tree = LazySegmentTree {
            len,
            nodes: vec![T::zero(); slots],
            pending: vec![T::zero(); slots],
        };
        tree.build_node(values, ROOT, 0, len - 1);

        log::debug!("built lazy segment tree over {} elements ({} slots)", len, slots);
        return Ok(tree);
    }

    fn build_node(&mut self, values: &[T], node: usize, l: usize, r: usize) {
        if l == r {
            self.nodes[node] = values[l];
            return;
        }
        let mid = midpoint(l, r);
        self.build_node(values, left_child(node), l, mid);
        self.build_node(values, right_child(node), mid + 1, r);
        self.pull(node);
    }

    /// Recompute an internal node whose own pending slot is empty.
    #[inline]
    fn pull(&mut self, node: usize) {
        self.nodes[node] = self.nodes[left_child(node)] + self.nodes[right_child(node)];
    }

    /// Add `delta` to every element under `node`, deferring the children.
    #[inline]
    fn apply(&mut self, node: usize, l: usize, r: usize, delta: T) {
        self.nodes[node] = self.nodes[node] + delta.scale(span(l, r));
        self.pending[node] = self.pending[node] + delta;
    }

    /// Hand the pending delta of `node` to its children and clear it.
    /// A no-op once the node is resolved.
    fn push_down(&mut self, node: usize, l: usize, r: usize) {
        let delta = self.pending[node];
        if delta.is_zero() {
            return;
        }
        if l != r {
            let mid = midpoint(l, r);
            self.apply(left_child(node), l, mid, delta);
            self.apply(right_child(node), mid + 1, r, delta);
        }
        self.pending[node] = T::zero();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a tree cannot be built over an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of the whole sequence. The root never lags behind an update, so
    /// this needs no push-down. O(1).
    pub fn total(&self) -> T {
        self.nodes[ROOT]
    }

    /// Add `delta` to every element in the inclusive range `[left, right]`.
    /// O(log n).
    ///
    /// Fails with [`SegTreeError::InvalidRange`] if `left > right` or
    /// `right >= len`.
    pub fn range_update(&mut self, left: usize, right: usize, delta: T) -> Result<()> {
        layout::check_range(left, right, self.len)?;
        log::trace!("range update [{}, {}]", left, right);
        self.update_range(ROOT, 0, self.len - 1, left, right, delta);
        Ok(())
    }

    /// Add `delta` to the single element at `index`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<()> {
        layout::check_index(index, self.len)?;
        log::trace!("add at {}", index);
        self.update_range(ROOT, 0, self.len - 1, index, index, delta);
        Ok(())
    }

    fn update_range(&mut self, node: usize, l: usize, r: usize, ul: usize, ur: usize, delta: T) {
        self.push_down(node, l, r);
        if ur < l || r < ul {
            return;
        }
        if ul <= l && r <= ur {
            self.apply(node, l, r, delta);
            return;
        }
        let mid = midpoint(l, r);
        self.update_range(left_child(node), l, mid, ul, ur, delta);
        self.update_range(right_child(node), mid + 1, r, ul, ur, delta);
        self.pull(node);
    }

    /// Overwrite the element at `index`, resolving any pending deltas on
    /// the path to it first.
    ///
    /// Fails with [`SegTreeError::IndexOutOfRange`] if `index >= len`.
    pub fn point_update(&mut self, index: usize, value: T) -> Result<()> {
        layout::check_index(index, self.len)?;
        log::trace!("point update at {}", index);
        self.set_node(ROOT, 0, self.len - 1, index, value);
        Ok(())
    }

    fn set_node(&mut self, node: usize, l: usize, r: usize, index: usize, value: T) {
        self.push_down(node, l, r);
        if l == r {
            self.nodes[node] = value;
            return;
        }
        let mid = midpoint(l, r);
        if index <= mid {
            self.set_node(left_child(node), l, mid, index, value);
        } else {
            self.set_node(right_child(node), mid + 1, r, index, value);
        }
        self.pull(node);
    }

    /// Sum of the inclusive range `[left, right]`. O(log n).
    ///
    /// Fails with [`SegTreeError::InvalidRange`] if `left > right` or
    /// `right >= len`.
    pub fn range_query(&mut self, left: usize, right: usize) -> Result<T> {
        layout::check_range(left, right, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, left, right))
    }

    /// Sum over a Rust range, e.g. `tree.query(2..5)`.
    pub fn query(&mut self, range: impl RangeBounds<usize>) -> Result<T> {
        let (left, right) = layout::inclusive_bounds(range, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, left, right))
    }

    /// Current value of the element at `index`.
    pub fn get(&mut self, index: usize) -> Result<T> {
        layout::check_index(index, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, index, index))
    }

    fn query_node(&mut self, node: usize, l: usize, r: usize, ql: usize, qr: usize) -> T {
        self.push_down(node, l, r);
        if ql == l && qr == r {
            return self.nodes[node];
        }
        let mid = midpoint(l, r);
        if qr <= mid {
            self.query_node(left_child(node), l, mid, ql, qr)
        } else if ql > mid {
            self.query_node(right_child(node), mid + 1, r, ql, qr)
        } else {
            self.query_node(left_child(node), l, mid, ql, mid)
                + self.query_node(right_child(node), mid + 1, r, mid + 1, qr)
        }
    }

    /// Every element in order. Resolves all pending deltas. O(n).
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_leaves(ROOT, 0, self.len - 1, &mut out);
        out
    }

    fn collect_leaves(&mut self, node: usize, l: usize, r: usize, out: &mut Vec<T>) {
        self.push_down(node, l, r);
        if l == r {
            out.push(self.nodes[node]);
            return;
        }
        let mid = midpoint(l, r);
        self.collect_leaves(left_child(node), l, mid, out);
        self.collect_leaves(right_child(node), mid + 1, r, out);
    }
}
