//! Aggregate segment tree.
//!
//! Answers merge-aggregate queries over any contiguous index range and
//! overwrites single elements, both in O(log n). The merge function is
//! supplied at construction, see [`crate::merge`].
//!
//! Nodes live in one flat `Vec`: node 0 is the root and node `i` has
//! children `2i + 1` and `2i + 2`. Internal nodes hold `merge(left, right)`
//! of their children, leaves hold the raw element.

use std::ops::RangeBounds;

use crate::error::{Result, SegTreeError};
use crate::layout::{self, ROOT, left_child, midpoint, right_child};
use crate::merge::Merge;

/// A segment tree over a fixed-length sequence.
#[derive(Clone, Debug)]
pub struct SegmentTree<T, M> {
    len: usize,
    nodes: Vec<T>,
    merge: M,
}

impl<T: Clone, M: Merge<T>> SegmentTree<T, M> {
    /// Build a tree over `values`. O(n).
    ///
    /// Fails with [`SegTreeError::InvalidInput`] if `values` is empty.
    pub fn build(values: &[T], merge: M) -> Result<Self> {
        let Some(first) = values.first() else {
            log::debug!("rejecting segment tree over an empty sequence");
            return Err(SegTreeError::InvalidInput);
        };

        let len = values.len();
        // Slots outside the recursion tree are never read, any filler works.
        let mut tree = SegmentTree {
            len,
            nodes: vec![first.clone(); layout::slot_count(len)],
            merge,
        };
        tree.build_node(values, ROOT, 0, len - 1);

        log::debug!("built segment tree over {} elements ({} slots)", len, tree.nodes.len());
        return Ok(tree);
    }

    fn build_node(&mut self, values: &[T], node: usize, l: usize, r: usize) {
        if l == r {
            self.nodes[node] = values[l].clone();
            return;
        }
        let mid = midpoint(l, r);
        self.build_node(values, left_child(node), l, mid);
        self.build_node(values, right_child(node), mid + 1, r);
        self.pull(node);
    }

    #[inline]
    fn pull(&mut self, node: usize) {
        let (left, right) = (left_child(node), right_child(node));
        self.nodes[node] = self.merge.merge(&self.nodes[left], &self.nodes[right]);
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a tree cannot be built over an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The merge function this tree was built with.
    pub fn merge_fn(&self) -> &M {
        &self.merge
    }

    /// Aggregate of the whole sequence. O(1).
    pub fn total(&self) -> &T {
        &self.nodes[ROOT]
    }

    /// Current element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        layout::check_index(index, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, index, index))
    }

    /// Overwrite the element at `index` and refresh its O(log n) ancestors.
    ///
    /// Fails with [`SegTreeError::IndexOutOfRange`] if `index >= len`.
    pub fn point_update(&mut self, index: usize, value: T) -> Result<()> {
        layout::check_index(index, self.len)?;
        log::trace!("point update at {}", index);
        self.update_node(ROOT, 0, self.len - 1, index, value);
        Ok(())
    }

    fn update_node(&mut self, node: usize, l: usize, r: usize, index: usize, value: T) {
        if l == r {
            self.nodes[node] = value;
            return;
        }
        let mid = midpoint(l, r);
        if index <= mid {
            self.update_node(left_child(node), l, mid, index, value);
        } else {
            self.update_node(right_child(node), mid + 1, r, index, value);
        }
        self.pull(node);
    }

    /// Aggregate of the inclusive range `[left, right]`. O(log n).
    ///
    /// Fails with [`SegTreeError::InvalidRange`] if `left > right` or
    /// `right >= len`.
    pub fn range_query(&self, left: usize, right: usize) -> Result<T> {
        layout::check_range(left, right, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, left, right))
    }

    /// Aggregate of a Rust range, e.g. `tree.query(2..5)` or `tree.query(..)`.
    ///
    /// Empty ranges are rejected with [`SegTreeError::InvalidRange`].
    pub fn query(&self, range: impl RangeBounds<usize>) -> Result<T> {
        let (left, right) = layout::inclusive_bounds(range, self.len)?;
        Ok(self.query_node(ROOT, 0, self.len - 1, left, right))
    }

    /// `[ql, qr]` is always a subrange of `[l, r]`, so a node is either
    /// returned whole or split into at most two narrower queries.
    fn query_node(&self, node: usize, l: usize, r: usize, ql: usize, qr: usize) -> T {
        if ql == l && qr == r {
            return self.nodes[node].clone();
        }
        let mid = midpoint(l, r);
        if qr <= mid {
            self.query_node(left_child(node), l, mid, ql, qr)
        } else if ql > mid {
            self.query_node(right_child(node), mid + 1, r, ql, qr)
        } else {
            let left = self.query_node(left_child(node), l, mid, ql, mid);
            let right = self.query_node(right_child(node), mid + 1, r, mid + 1, qr);
            self.merge.merge(&left, &right)
        }
    }

    /// Every element in order, read back from the leaves.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_leaves(ROOT, 0, self.len - 1, &mut out);
        out
    }

    fn collect_leaves(&self, node: usize, l: usize, r: usize, out: &mut Vec<T>) {
        if l == r {
            out.push(self.nodes[node].clone());
            return;
        }
        let mid = midpoint(l, r);
        self.collect_leaves(left_child(node), l, mid, out);
        self.collect_leaves(right_child(node), mid + 1, r, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{Gcd, Max, Min, Sum};

    #[test]
    fn sum_scenario() {
        let mut tree = SegmentTree::build(&[1, 3, 5, 7, 9], Sum).unwrap();
        assert_eq!(tree.range_query(1, 3), Ok(15));

        tree.point_update(2, 10).unwrap();
        assert_eq!(tree.range_query(1, 3), Ok(20));
        assert_eq!(*tree.total(), 30);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result = SegmentTree::<i32, _>::build(&[], Sum);
        assert_eq!(result.unwrap_err(), SegTreeError::InvalidInput);
    }

    #[test]
    fn single_element() {
        let mut tree = SegmentTree::build(&[42], Max).unwrap();
        assert_eq!(tree.range_query(0, 0), Ok(42));
        tree.point_update(0, -1).unwrap();
        assert_eq!(*tree.total(), -1);
        assert!(tree.range_query(0, 1).is_err());
    }

    #[test]
    fn every_subrange_matches_fold() {
        let values: Vec<i64> = (0..37).map(|i| (i * 7919 % 101) - 50).collect();
        let sum = SegmentTree::build(&values, Sum).unwrap();
        let min = SegmentTree::build(&values, Min).unwrap();

        for l in 0..values.len() {
            for r in l..values.len() {
                let slice = &values[l..=r];
                assert_eq!(sum.range_query(l, r), Ok(slice.iter().sum::<i64>()));
                assert_eq!(min.range_query(l, r), Ok(*slice.iter().min().unwrap()));
            }
        }
    }

    #[test]
    fn gcd_tree() {
        let mut tree = SegmentTree::build(&[12u64, 18, 24, 36, 7], Gcd).unwrap();
        assert_eq!(tree.range_query(0, 3), Ok(6));
        assert_eq!(tree.range_query(0, 4), Ok(1));
        tree.point_update(4, 30).unwrap();
        assert_eq!(*tree.total(), 6);
    }

    #[test]
    fn left_to_right_order_is_preserved() {
        let words: Vec<String> = "the quick brown fox jumps".split(' ').map(String::from).collect();
        let concat = |a: &String, b: &String| format!("{}{}", a, b);
        let tree = SegmentTree::build(&words, concat).unwrap();
        assert_eq!(tree.total(), "thequickbrownfoxjumps");
        assert_eq!(tree.range_query(1, 3).unwrap(), "quickbrownfox");
    }

    #[test]
    fn rejected_update_leaves_tree_untouched() {
        let mut tree = SegmentTree::build(&[1, 2, 3], Sum).unwrap();
        assert_eq!(
            tree.point_update(3, 100),
            Err(SegTreeError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(tree.to_vec(), vec![1, 2, 3]);
        assert_eq!(*tree.total(), 6);
    }

    #[test]
    fn rust_range_queries() {
        let tree = SegmentTree::build(&[1, 3, 5, 7, 9], Sum).unwrap();
        assert_eq!(tree.query(..), Ok(25));
        assert_eq!(tree.query(1..4), Ok(15));
        assert_eq!(tree.query(1..=3), Ok(15));
        assert_eq!(tree.query(3..), Ok(16));
        assert!(tree.query(2..2).is_err());
    }
}
