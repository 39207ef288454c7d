//! AFL fuzz harness for the segment trees
//!
//! The input bytes describe a sequence and a stream of operations. Every
//! operation runs on both trees and on a plain `Vec`, and every query must
//! agree with a linear scan of the `Vec`:
//! 1. Range adds on the lazy tree shift exactly the covered elements
//! 2. Point updates are visible to both trees
//! 3. Out-of-range calls are rejected and change nothing

use afl::fuzz;
use segtree::merge::Min;
use segtree::{LazySegmentTree, SegmentTree};

const MAX_LEN: usize = 64;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Add `delta` to `[left, right]` (lazy tree only)
    RangeAdd { left: u8, right: u8, delta: i8 },
    /// Overwrite one element (both trees)
    Set { index: u8, value: i8 },
    /// Query `[left, right]` on both trees
    Query { left: u8, right: u8 },
    /// Raw, possibly out-of-range bounds that must be rejected consistently
    Raw { left: u8, right: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        let (&tag, rest) = bytes.split_first()?;

        match tag % 4 {
            0 if rest.len() >= 3 => {
                let op = FuzzOp::RangeAdd { left: rest[0], right: rest[1], delta: rest[2] as i8 };
                Some((op, &rest[3..]))
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Set { index: rest[0], value: rest[1] as i8 };
                Some((op, &rest[2..]))
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::Query { left: rest[0], right: rest[1] };
                Some((op, &rest[2..]))
            }
            3 if rest.len() >= 2 => {
                let op = FuzzOp::Raw { left: rest[0], right: rest[1] };
                Some((op, &rest[2..]))
            }
            _ => None,
        }
    }
}

/// Map a byte onto `[0, len)`.
fn scaled(frac: u8, len: usize) -> usize {
    frac as usize * len / 256
}

fn ordered(a: u8, b: u8, len: usize) -> (usize, usize) {
    let (a, b) = (scaled(a, len), scaled(b, len));
    (a.min(b), a.max(b))
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&len_byte, rest)) = data.split_first() else {
            return;
        };
        let len = (len_byte as usize % MAX_LEN) + 1;
        if rest.len() < len {
            return;
        }
        let mut model: Vec<i64> = rest[..len].iter().map(|&b| b as i8 as i64).collect();
        let mut remaining = &rest[len..];

        let mut lazy = LazySegmentTree::build(&model).unwrap();
        let mut min = SegmentTree::build(&model, Min).unwrap();
        // The min tree never sees range adds, so it tracks its own copy.
        let mut min_model = model.clone();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::RangeAdd { left, right, delta } => {
                    let (l, r) = ordered(left, right, len);
                    lazy.range_update(l, r, delta as i64).unwrap();
                    for x in &mut model[l..=r] {
                        *x += delta as i64;
                    }
                }

                FuzzOp::Set { index, value } => {
                    let i = scaled(index, len);
                    lazy.point_update(i, value as i64).unwrap();
                    min.point_update(i, value as i64).unwrap();
                    model[i] = value as i64;
                    min_model[i] = value as i64;
                }

                FuzzOp::Query { left, right } => {
                    let (l, r) = ordered(left, right, len);
                    assert_eq!(lazy.range_query(l, r), Ok(model[l..=r].iter().sum::<i64>()));
                    assert_eq!(min.range_query(l, r), Ok(*min_model[l..=r].iter().min().unwrap()));
                }

                FuzzOp::Raw { left, right } => {
                    let (l, r) = (left as usize, right as usize);
                    let valid = l <= r && r < len;
                    assert_eq!(lazy.range_update(l, r, 1).is_ok(), valid);
                    assert_eq!(min.range_query(l, r).is_ok(), valid);
                    if valid {
                        for x in &mut model[l..=r] {
                            *x += 1;
                        }
                    }
                }
            }
        }

        // Final full comparison
        assert_eq!(lazy.to_vec(), model, "Lazy tree diverged from model");
        assert_eq!(min.to_vec(), min_model, "Min tree diverged from model");
        assert_eq!(lazy.total(), model.iter().sum::<i64>());
    });
}
