//! Merge functions that combine the aggregates of two adjacent ranges.
//!
//! A merge must be associative: `merge(a, merge(b, c)) == merge(merge(a, b), c)`.
//! It does not need to be commutative. The tree always passes the aggregate
//! of the left range as `left` and the aggregate of the right range as
//! `right`, so order-sensitive merges (concatenation, matrix products) give
//! the same answer as a left-to-right fold.
//!
//! Any `Fn(&T, &T) -> T` is a merge, so closures can be passed directly.

use std::ops::{Add, Mul};

/// An associative binary operator over `T`.
pub trait Merge<T> {
    /// Combine the aggregate of a left range with the aggregate of the
    /// range immediately to its right.
    fn merge(&self, left: &T, right: &T) -> T;
}

impl<T, F> Merge<T> for F
where
    F: Fn(&T, &T) -> T,
{
    #[inline]
    fn merge(&self, left: &T, right: &T) -> T {
        self(left, right)
    }
}

/// Sum of the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Clone + Add<Output = T>> Merge<T> for Sum {
    #[inline]
    fn merge(&self, left: &T, right: &T) -> T {
        return left.clone() + right.clone();
    }
}

/// Product of the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product;

impl<T: Clone + Mul<Output = T>> Merge<T> for Product {
    #[inline]
    fn merge(&self, left: &T, right: &T) -> T {
        return left.clone() * right.clone();
    }
}

/// Smallest element of the range. Ties keep the leftmost value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Min;

impl<T: Clone + PartialOrd> Merge<T> for Min {
    #[inline]
    fn merge(&self, left: &T, right: &T) -> T {
        if right < left { right.clone() } else { left.clone() }
    }
}

/// Largest element of the range. Ties keep the leftmost value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Max;

impl<T: Clone + PartialOrd> Merge<T> for Max {
    #[inline]
    fn merge(&self, left: &T, right: &T) -> T {
        if right > left { right.clone() } else { left.clone() }
    }
}

/// Greatest common divisor of the range, for primitive integers.
///
/// `gcd(0, x) == |x|`, so zeros in the sequence are neutral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gcd;

macro_rules! impl_gcd_unsigned {
    ($($t:ty),*) => {$(
        impl Merge<$t> for Gcd {
            fn merge(&self, left: &$t, right: &$t) -> $t {
                let (mut a, mut b) = (*left, *right);
                while b != 0 {
                    (a, b) = (b, a % b);
                }
                a
            }
        }
    )*};
}

// Signed inputs go through their unsigned magnitude so `MIN` cannot overflow
// mid-loop; only a final result of exactly `2^(bits-1)` wraps back to `MIN`.
macro_rules! impl_gcd_signed {
    ($($t:ty),*) => {$(
        impl Merge<$t> for Gcd {
            fn merge(&self, left: &$t, right: &$t) -> $t {
                let (mut a, mut b) = (left.unsigned_abs(), right.unsigned_abs());
                while b != 0 {
                    (a, b) = (b, a % b);
                }
                a as $t
            }
        }
    )*};
}

impl_gcd_unsigned!(u8, u16, u32, u64, u128, usize);
impl_gcd_signed!(i8, i16, i32, i64, i128, isize);
