//! Min-Max Heap Data Structures for Rust
//!
//! This crate provides a symmetric min-max heap, a double-ended priority queue
//! with O(log n) access to both its minimum and its maximum, together with a
//! few structures built on or next to it.
//!
//! # Features
//!
//! - **Min-Max Heap**: O(log n) push, pop-min, pop-max, remove and update by position; O(n) bulk build
//! - **Bounded pushes**: keep only the N smallest or N largest keys seen so far
//! - **Swap observers**: get told about every element movement, e.g. to index items by position
//! - **Tracked Heap**: item-addressed update and removal on top of the observer hook
//! - **Simple Binary Heap**: min-first or max-first single-ended baseline
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::minmax::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.push(5, "item1");
//! heap.push(3, "item2");
//! heap.push(8, "item3");
//!
//! assert_eq!(heap.peek_min(), Some((&3, &"item2")));
//! assert_eq!(heap.peek_max(), Some((&8, &"item3")));
//!
//! // Keep the three smallest keys
//! let mut smallest = MinMaxHeap::new();
//! for k in [9, 4, 7, 1, 8] {
//!     smallest.push_min_n(k, (), 3);
//! }
//! assert_eq!(smallest.len(), 3);
//! assert_eq!(smallest.peek_max(), Some((&7, &())));
//! ```

pub mod bounded;
pub mod minmax;
pub mod observer;
pub mod simple_binary;
pub mod stdlib_compat;
pub mod tracked;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{DoubleEndedHeap, Heap, HeapError, MergeableHeap};
