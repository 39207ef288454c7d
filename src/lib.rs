//! Segtree - range-aggregate queries over a fixed-length sequence.
//!
//! Two trees share one flat-array layout:
//!
//! - [`SegmentTree`]: any associative merge (sum, min, max, gcd, ...), range
//!   queries and single-element overwrites in O(log n).
//! - [`LazySegmentTree`]: sums only, adds a delta to a whole range in
//!   O(log n) by deferring the work below fully covered nodes.
//!
//! # Quick Start
//!
//! ```
//! use segtree::{LazySegmentTree, SegmentTree};
//! use segtree::merge::{Min, Sum};
//!
//! let mut sums = SegmentTree::build(&[1, 3, 5, 7, 9], Sum).unwrap();
//! assert_eq!(sums.range_query(1, 3), Ok(15));
//! sums.point_update(2, 10).unwrap();
//! assert_eq!(sums.range_query(1, 3), Ok(20));
//!
//! let mins = SegmentTree::build(&[4, 2, 8, 6], Min).unwrap();
//! assert_eq!(mins.query(2..), Ok(6));
//!
//! let mut lazy = LazySegmentTree::build(&[1, 3, 5, 7, 9]).unwrap();
//! lazy.range_update(0, 2, 10).unwrap();
//! assert_eq!(lazy.range_query(0, 4), Ok(55));
//! ```
//!
//! Queries on the lazy tree take `&mut self` because they push pending
//! deltas down as they go. Share a lazy tree between threads behind one
//! `Mutex`, not an `RwLock`.

pub mod error;
mod layout;
pub mod lazy_tree;
pub mod merge;
pub mod segment_tree;

pub use error::{Result, SegTreeError};
pub use lazy_tree::{LazySegmentTree, RangeAdd};
pub use segment_tree::SegmentTree;
