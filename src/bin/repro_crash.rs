//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use segtree::merge::Min;
use segtree::{LazySegmentTree, SegmentTree};

const MAX_LEN: usize = 64;

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    RangeAdd { left: u8, right: u8, delta: i8 },
    Set { index: u8, value: i8 },
    Query { left: u8, right: u8 },
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

fn scaled(frac: u8, len: usize) -> usize {
    frac as usize * len / 256
}

fn ordered(a: u8, b: u8, len: usize) -> (usize, usize) {
    let (a, b) = (scaled(a, len), scaled(b, len));
    (a.min(b), a.max(b))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }

    let data = match fs::read(&args[1]) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args[1], err);
            std::process::exit(1);
        }
    };
    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let Some((&len_byte, rest)) = data.split_first() else {
        eprintln!("Empty input, nothing to replay");
        return;
    };
    let len = (len_byte as usize % MAX_LEN) + 1;
    if rest.len() < len {
        eprintln!("Input too short for a sequence of {} elements", len);
        return;
    }

    let mut model: Vec<i64> = rest[..len].iter().map(|&b| b as i8 as i64).collect();
    let mut min_model = model.clone();
    let mut remaining = &rest[len..];
    eprintln!("Initial ({} elements): {:?}", len, model);

    let mut lazy = match LazySegmentTree::build(&model) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("Build failed: {}", err);
            std::process::exit(1);
        }
    };
    let mut min = match SegmentTree::build(&model, Min) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("Build failed: {}", err);
            std::process::exit(1);
        }
    };

    let mut op_num = 0;
    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;
        eprintln!("Op {}: {:?}", op_num, op);

        match op {
            FuzzOp::RangeAdd { left, right, delta } => {
                let (l, r) = ordered(left, right, len);
                eprintln!("  add {} to [{}, {}]", delta, l, r);
                if let Err(err) = lazy.range_update(l, r, delta as i64) {
                    eprintln!("  UNEXPECTED rejection: {}", err);
                }
                for x in &mut model[l..=r] {
                    *x += delta as i64;
                }
            }
            FuzzOp::Set { index, value } => {
                let i = scaled(index, len);
                eprintln!("  set [{}] = {}", i, value);
                let lazy_result = lazy.point_update(i, value as i64);
                let min_result = min.point_update(i, value as i64);
                if lazy_result.is_err() || min_result.is_err() {
                    eprintln!("  UNEXPECTED rejection: {:?} / {:?}", lazy_result, min_result);
                }
                model[i] = value as i64;
                min_model[i] = value as i64;
            }
            FuzzOp::Query { left, right } => {
                let (l, r) = ordered(left, right, len);
                let expected_sum: i64 = model[l..=r].iter().sum();
                let expected_min = min_model[l..=r].iter().min().copied();
                let sum = lazy.range_query(l, r);
                let min_value = min.range_query(l, r);
                eprintln!("  [{}, {}]: sum {:?} (expected {}), min {:?} (expected {:?})",
                    l, r, sum, expected_sum, min_value, expected_min);
                if sum != Ok(expected_sum) || min_value.ok() != expected_min {
                    eprintln!("  MISMATCH");
                    std::process::exit(1);
                }
            }
            FuzzOp::Raw { left, right } => {
                let (l, r) = (left as usize, right as usize);
                let valid = l <= r && r < len;
                let update = lazy.range_update(l, r, 1);
                let query = min.range_query(l, r);
                eprintln!(
                    "  raw [{}, {}] valid={} update={:?} query={:?}",
                    l, r, valid, update, query
                );
                if update.is_ok() != valid || query.is_ok() != valid {
                    eprintln!("  MISMATCH");
                    std::process::exit(1);
                }
                if valid {
                    for x in &mut model[l..=r] {
                        *x += 1;
                    }
                }
            }
        }
    }

    eprintln!("\n=== Final comparison ===");
    let lazy_values = lazy.to_vec();
    let min_values = min.to_vec();
    eprintln!("  lazy:  {:?}", lazy_values);
    eprintln!("  model: {:?}", model);
    eprintln!("  min:   {:?}", min_values);
    eprintln!("  model: {:?}", min_model);
    if lazy_values != model || min_values != min_model {
        eprintln!("\nFinal state diverged!");
        std::process::exit(1);
    }

    eprintln!("\nAll checks passed!");
}
