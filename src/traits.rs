//! Common traits for heap data structures
//!
//! This module provides the trait hierarchy shared by every heap in the crate:
//!
//! - [`Heap`]: Base trait for single-ended (min-first or max-first) heaps
//! - [`DoubleEndedHeap`]: Adds access to the opposite end, for min-max heaps
//! - [`MergeableHeap`]: Adds consuming merge of two heaps of the same type
//!
//! All heaps store (priority, item) pairs so the ordering key stays separate
//! from the payload.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Pre-supplied key and value sequences have different lengths
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },
    /// The item is not stored in the heap
    UnknownItem,
    /// The item is already stored in the heap
    DuplicateItem,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::LengthMismatch { keys, values } => {
                write!(f, "key/value length mismatch: {keys} keys, {values} values")
            }
            HeapError::UnknownItem => write!(f, "item is not stored in the heap"),
            HeapError::DuplicateItem => write!(f, "item is already stored in the heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the element at the front of the heap
/// - `peek` returns the front element without removing it
///
/// The front is the minimum for min-ordered heaps (the default everywhere in
/// this crate) and the maximum for heaps explicitly built max-first.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::Heap;
/// use rust_minmax_heaps::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n) for every heap in this crate.
    fn push(&mut self, priority: P, item: T);

    /// Returns the front priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the front priority and associated item
    ///
    /// Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Heap with O(1) access to both the minimum and the maximum
///
/// [`Heap::peek`] and [`Heap::pop`] address the minimum; this trait adds the
/// maximum end.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::{DoubleEndedHeap, Heap};
/// use rust_minmax_heaps::minmax::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(7, "seven");
///
/// assert_eq!(heap.peek_max(), Some((&7, &"seven")));
/// assert_eq!(DoubleEndedHeap::pop_max(&mut heap), Some((7, "seven")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait DoubleEndedHeap<T, P: Ord>: Heap<T, P> {
    /// Returns the maximum priority and associated item without removing it
    fn peek_max(&self) -> Option<(&P, &T)>;

    /// Removes and returns the maximum priority and associated item
    fn pop_max(&mut self) -> Option<(P, T)>;
}

/// Heap that can absorb another heap of the same type
pub trait MergeableHeap<T, P: Ord>: Heap<T, P> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m) for array-backed heaps that rebuild in bulk.
    fn merge(&mut self, other: Self);
}
