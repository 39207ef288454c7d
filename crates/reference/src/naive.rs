//! Brute-force model: a `Vec` plus a merge function.

use std::ops::Add;

/// Direct element storage with linear-scan aggregation.
#[derive(Clone, Debug)]
pub struct NaiveTree<T, F> {
    values: Vec<T>,
    merge: F,
}

impl<T: Clone, F: Fn(&T, &T) -> T> NaiveTree<T, F> {
    pub fn new(values: Vec<T>, merge: F) -> Self {
        return NaiveTree { values, merge };
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Overwrite one element. Returns `None` if `index` is out of bounds.
    pub fn point_update(&mut self, index: usize, value: T) -> Option<()> {
        let slot = self.values.get_mut(index)?;
        *slot = value;
        Some(())
    }

    /// Left-to-right fold of `[left, right]`, or `None` for an invalid range.
    pub fn range_query(&self, left: usize, right: usize) -> Option<T> {
        if left > right {
            return None;
        }
        let slice = self.values.get(left..=right)?;
        let (first, rest) = slice.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, x| (self.merge)(&acc, x)))
    }
}

impl<T: Copy + Add<Output = T>, F: Fn(&T, &T) -> T> NaiveTree<T, F> {
    /// Add `delta` to every element in `[left, right]`, one by one.
    pub fn range_add(&mut self, left: usize, right: usize, delta: T) -> Option<()> {
        if left > right {
            return None;
        }
        for value in self.values.get_mut(left..=right)? {
            *value = *value + delta;
        }
        Some(())
    }
}
