//! Reference range-aggregate structures.
//!
//! These exist to check and measure the flat-array trees in `segtree`:
//!
//! | Structure | Storage | Query | Update | Range add |
//! |-----------|---------|-------|--------|-----------|
//! | `NaiveTree` | plain `Vec` | O(n) scan | O(1) | O(n) |
//! | `NodeTree` | boxed nodes, stored ranges | O(log n) | O(log n) | - |
//!
//! `NaiveTree` is the oracle: it mutates elements directly and folds the
//! requested slice left to right, so it is obviously correct. `NodeTree` is
//! the pointer-based rendition of the same recursive decomposition, where
//! every node remembers the range it covers instead of recomputing it.
//!
//! Invalid ranges and indices return `None` instead of an error; callers
//! here are tests and benches that compare against `segtree`'s `Result`s.
//!
//! # Example
//!
//! ```
//! use reference::naive::NaiveTree;
//! use reference::node_tree::NodeTree;
//!
//! let sum = |a: &i64, b: &i64| a + b;
//! let mut naive = NaiveTree::new(vec![1, 3, 5, 7, 9], sum);
//! let nodes = NodeTree::build(&[1, 3, 5, 7, 9], sum).unwrap();
//!
//! assert_eq!(naive.range_query(1, 3), Some(15));
//! assert_eq!(nodes.range_query(1, 3), Some(15));
//!
//! naive.range_add(0, 2, 10);
//! assert_eq!(naive.range_query(0, 4), Some(55));
//! ```

pub mod naive;
pub mod node_tree;
