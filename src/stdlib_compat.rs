//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped API on top of any heap in
//! this crate, for items that are their own priority.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-first by default**: `peek`/`pop` return the smallest item unless
//!   the underlying heap is max-first.
//! - **Both ends**: over a [`MinMaxHeap`](crate::minmax::MinMaxHeap) the
//!   wrapper also offers `peek_max`/`pop_max`.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::stdlib_compat::StdHeap;
//! use rust_minmax_heaps::minmax::MinMaxHeap;
//!
//! let mut heap: StdHeap<i32, MinMaxHeap<i32, ()>> = [5, 3, 7].into_iter().collect();
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.peek_max(), Some(&7));
//! assert_eq!(heap.pop_max(), Some(7));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.len(), 1);
//! ```

use std::marker::PhantomData;

use crate::traits::{DoubleEndedHeap, Heap};

/// A `BinaryHeap`-like wrapper where the item is its own priority
///
/// # Type Parameters
/// - `T`: The item type, must implement `Ord`
/// - `H`: The underlying heap (e.g. `MinMaxHeap<T, ()>` or `SimpleBinaryHeap<(), T>`)
#[derive(Debug, Clone)]
pub struct StdHeap<T: Ord, H: Heap<(), T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: Heap<(), T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an already configured heap, e.g. a max-first binary heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item, ())
    }

    /// Returns the front item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|(priority, _)| priority)
    }

    /// Removes and returns the front item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|(priority, _)| priority)
    }

    /// Consumes the wrapper, returning the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: DoubleEndedHeap<(), T>> StdHeap<T, H> {
    /// Returns the largest item without removing it
    pub fn peek_max(&self) -> Option<&T> {
        self.heap.peek_max().map(|(priority, _)| priority)
    }

    /// Removes and returns the largest item
    pub fn pop_max(&mut self) -> Option<T> {
        self.heap.pop_max().map(|(priority, _)| priority)
    }
}

impl<T: Ord, H: Heap<(), T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, H: Heap<(), T>> Extend<T> for StdHeap<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord, H: Heap<(), T>> FromIterator<T> for StdHeap<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
