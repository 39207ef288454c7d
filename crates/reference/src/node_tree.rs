//! Pointer-based segment tree.
//!
//! Same decomposition as the flat-array tree, but every node is its own
//! allocation and stores the inclusive range `[lo, hi]` it covers, so no
//! traversal has to recompute a midpoint to know where it is.

struct Node<T> {
    lo: usize,
    hi: usize,
    value: T,
    children: Option<Box<[Node<T>; 2]>>,
}

impl<T: Clone> Node<T> {
    fn build<F: Fn(&T, &T) -> T>(values: &[T], lo: usize, hi: usize, merge: &F) -> Self {
        if lo == hi {
            return Node { lo, hi, value: values[lo].clone(), children: None };
        }
        let mid = lo + (hi - lo) / 2;
        let left = Node::build(values, lo, mid, merge);
        let right = Node::build(values, mid + 1, hi, merge);
        let value = merge(&left.value, &right.value);
        Node { lo, hi, value, children: Some(Box::new([left, right])) }
    }

    fn update<F: Fn(&T, &T) -> T>(&mut self, index: usize, value: T, merge: &F) {
        let Some(children) = self.children.as_mut() else {
            self.value = value;
            return;
        };
        let [left, right] = &mut **children;
        if index <= left.hi {
            left.update(index, value, merge);
        } else {
            right.update(index, value, merge);
        }
        self.value = merge(&left.value, &right.value);
    }

    fn query<F: Fn(&T, &T) -> T>(&self, left: usize, right: usize, merge: &F) -> T {
        if left == self.lo && right == self.hi {
            return self.value.clone();
        }
        let Some(children) = self.children.as_ref() else {
            return self.value.clone();
        };
        let [l, r] = &**children;
        if right <= l.hi {
            l.query(left, right, merge)
        } else if left >= r.lo {
            r.query(left, right, merge)
        } else {
            merge(&l.query(left, l.hi, merge), &r.query(r.lo, right, merge))
        }
    }
}

/// Segment tree with one heap node per tree node.
pub struct NodeTree<T, F> {
    root: Node<T>,
    merge: F,
}

impl<T: Clone, F: Fn(&T, &T) -> T> NodeTree<T, F> {
    /// Returns `None` for an empty sequence.
    pub fn build(values: &[T], merge: F) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let root = Node::build(values, 0, values.len() - 1, &merge);
        Some(NodeTree { root, merge })
    }

    pub fn len(&self) -> usize {
        self.root.hi + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn point_update(&mut self, index: usize, value: T) -> Option<()> {
        if index > self.root.hi {
            return None;
        }
        self.root.update(index, value, &self.merge);
        Some(())
    }

    pub fn range_query(&self, left: usize, right: usize) -> Option<T> {
        if left > right || right > self.root.hi {
            return None;
        }
        Some(self.root.query(left, right, &self.merge))
    }
}
