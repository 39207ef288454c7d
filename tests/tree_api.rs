//! Tests for the public API of both trees: scenarios and error contracts.

use segtree::merge::{Gcd, Max, Merge, Min, Product, Sum};
use segtree::{LazySegmentTree, SegTreeError, SegmentTree};

// =============================================================================
// Aggregate tree
// =============================================================================

#[test]
fn sum_query_then_point_update() {
    let mut tree = SegmentTree::build(&[1, 3, 5, 7, 9], Sum).unwrap();
    assert_eq!(tree.range_query(1, 3), Ok(15));

    tree.point_update(2, 10).unwrap();
    assert_eq!(tree.range_query(1, 3), Ok(20));
    assert_eq!(tree.range_query(0, 0), Ok(1));
    assert_eq!(tree.range_query(3, 4), Ok(16));
}

#[test]
fn every_named_merge() {
    let values = [6u64, 4, 10, 8, 2];
    assert_eq!(SegmentTree::build(&values, Sum).unwrap().range_query(1, 3), Ok(22));
    assert_eq!(SegmentTree::build(&values, Product).unwrap().range_query(1, 3), Ok(320));
    assert_eq!(SegmentTree::build(&values, Min).unwrap().range_query(0, 3), Ok(4));
    assert_eq!(SegmentTree::build(&values, Max).unwrap().range_query(3, 4), Ok(8));
    assert_eq!(SegmentTree::build(&values, Gcd).unwrap().range_query(0, 3), Ok(2));
}

#[test]
fn closure_merge_over_pairs() {
    // (min, count of min) is associative but carries more than one number.
    let values: Vec<(i32, usize)> = [3, 1, 4, 1, 5, 9, 2, 6].iter().map(|&v| (v, 1)).collect();
    let min_count = |a: &(i32, usize), b: &(i32, usize)| {
        if a.0 < b.0 {
            *a
        } else if b.0 < a.0 {
            *b
        } else {
            (a.0, a.1 + b.1)
        }
    };
    let mut tree = SegmentTree::build(&values, min_count).unwrap();
    assert_eq!(*tree.total(), (1, 2));
    assert_eq!(tree.range_query(4, 7), Ok((2, 1)));

    tree.point_update(6, (1, 1)).unwrap();
    assert_eq!(*tree.total(), (1, 3));
    assert_eq!(tree.merge_fn().merge(&(7, 2), &(7, 5)), (7, 7));
}

#[test]
fn get_and_to_vec_read_leaves() {
    let mut tree = SegmentTree::build(&[5, 4, 3, 2, 1, 0], Max).unwrap();
    tree.point_update(0, -5).unwrap();
    assert_eq!(tree.get(0), Ok(-5));
    assert_eq!(tree.get(5), Ok(0));
    assert_eq!(tree.to_vec(), vec![-5, 4, 3, 2, 1, 0]);
    assert_eq!(tree.len(), 6);
    assert!(!tree.is_empty());
}

#[test]
fn aggregate_errors() {
    assert_eq!(SegmentTree::<i32, Sum>::build(&[], Sum).unwrap_err(), SegTreeError::InvalidInput);

    let mut tree = SegmentTree::build(&[1, 2, 3, 4], Sum).unwrap();
    assert_eq!(tree.point_update(4, 0), Err(SegTreeError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(tree.get(10), Err(SegTreeError::IndexOutOfRange { index: 10, len: 4 }));
    assert_eq!(
        tree.range_query(3, 2),
        Err(SegTreeError::InvalidRange { left: 3, right: 2, len: 4 })
    );
    assert_eq!(
        tree.range_query(0, 4),
        Err(SegTreeError::InvalidRange { left: 0, right: 4, len: 4 })
    );
    assert_eq!(tree.query(1..1), Err(SegTreeError::InvalidRange { left: 1, right: 0, len: 4 }));
    assert_eq!(tree.to_vec(), vec![1, 2, 3, 4]);
}

// =============================================================================
// Lazy tree
// =============================================================================

#[test]
fn overlapping_range_updates() {
    let mut tree = LazySegmentTree::build(&[1, 3, 5, 7, 9]).unwrap();
    tree.range_update(0, 2, 10).unwrap();
    assert_eq!(tree.range_query(0, 4), Ok(55));

    tree.range_update(2, 4, 5).unwrap();
    assert_eq!(tree.range_query(1, 3), Ok(45));
    assert_eq!(tree.total(), 70);
}

#[test]
fn add_and_point_update_mix() {
    let mut tree = LazySegmentTree::build(&[0u64; 10]).unwrap();
    tree.range_update(0, 9, 1).unwrap();
    tree.add(4, 10).unwrap();
    tree.range_update(3, 6, 2).unwrap();
    tree.point_update(5, 0).unwrap();
    tree.range_update(5, 9, 1).unwrap();

    assert_eq!(tree.to_vec(), vec![1, 1, 1, 3, 13, 1, 4, 2, 2, 2]);
    assert_eq!(tree.query(3..=5), Ok(17));
    assert_eq!(tree.get(4), Ok(13));
}

#[test]
fn lazy_errors() {
    assert_eq!(LazySegmentTree::<i64>::build(&[]).unwrap_err(), SegTreeError::InvalidInput);

    let mut tree = LazySegmentTree::build(&[1i64, 2, 3]).unwrap();
    assert_eq!(
        tree.range_update(1, 0, 5),
        Err(SegTreeError::InvalidRange { left: 1, right: 0, len: 3 })
    );
    assert_eq!(
        tree.range_update(0, 3, 5),
        Err(SegTreeError::InvalidRange { left: 0, right: 3, len: 3 })
    );
    assert_eq!(tree.add(3, 1), Err(SegTreeError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(
        tree.range_query(0, 3),
        Err(SegTreeError::InvalidRange { left: 0, right: 3, len: 3 })
    );
    assert_eq!(tree.to_vec(), vec![1, 2, 3]);
}

#[test]
fn errors_display() {
    let mut tree = LazySegmentTree::build(&[1i64, 2, 3]).unwrap();
    let err = tree.range_update(2, 7, 1).unwrap_err();
    assert_eq!(err.to_string(), "range [2, 7] is invalid for a tree of length 3");
}
