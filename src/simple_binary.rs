//! Simple Binary Heap implementation
//!
//! A plain zero-indexed binary heap that is either min-first or max-first,
//! chosen at construction. It implements the base [`Heap`] trait and
//! [`MergeableHeap`], and serves as the single-ended baseline next to
//! [`MinMaxHeap`](crate::minmax::MinMaxHeap).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `from_vec` | O(n)       |
//! | `merge`    | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::Heap;
//! use rust_minmax_heaps::simple_binary::SimpleBinaryHeap;
//!
//! let mut heap = SimpleBinaryHeap::new_max();
//! heap.push(3, "three");
//! heap.push(1, "one");
//! heap.push(2, "two");
//!
//! assert_eq!(heap.peek(), Some((&3, &"three")));
//! assert_eq!(heap.pop(), Some((3, "three")));
//! assert_eq!(heap.pop(), Some((2, "two")));
//! assert_eq!(heap.pop(), Some((1, "one")));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::{Heap, MergeableHeap};

/// Which end of the priority range a [`SimpleBinaryHeap`] serves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest priority first
    #[default]
    Min,
    /// Largest priority first
    Max,
}

impl Order {
    /// True when `a` belongs above `b`
    #[inline]
    fn above<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            Order::Min => a < b,
            Order::Max => a > b,
        }
    }
}

/// A binary heap of (priority, item) pairs
#[derive(Debug, Clone)]
pub struct SimpleBinaryHeap<T, P: Ord> {
    data: Vec<(P, T)>,
    order: Order,
}

impl<T, P: Ord> Heap<T, P> for SimpleBinaryHeap<T, P> {
    fn new() -> Self {
        Self::with_order(Order::Min)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }
}

impl<T, P: Ord> MergeableHeap<T, P> for SimpleBinaryHeap<T, P> {
    /// Appends the other heap's storage and rebuilds; the receiver's order wins
    fn merge(&mut self, other: Self) {
        self.data.extend(other.data);
        self.rebuild();
    }
}

impl<T, P: Ord> SimpleBinaryHeap<T, P> {
    /// Creates an empty heap serving `order` first
    pub fn with_order(order: Order) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty max-first heap
    pub fn new_max() -> Self {
        Self::with_order(Order::Max)
    }

    /// Builds a heap from arbitrary pairs in O(n)
    pub fn from_vec(data: Vec<(P, T)>, order: Order) -> Self {
        let mut heap = Self { data, order };
        heap.rebuild();
        heap
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Consumes the heap, returning its pairs in pop order
    pub fn into_sorted_vec(mut self) -> Vec<(P, T)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(pair) = self.pop() {
            sorted.push(pair);
        }
        sorted
    }

    /// Floyd's bottom-up construction
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.above(&self.data[index].0, &self.data[parent].0) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut top = index;

            if left < len && self.order.above(&self.data[left].0, &self.data[top].0) {
                top = left;
            }
            if right < len && self.order.above(&self.data[right].0, &self.data[top].0) {
                top = right;
            }

            if top != index {
                self.data.swap(index, top);
                index = top;
            } else {
                break;
            }
        }
    }
}

impl<T, P: Ord> Default for SimpleBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
