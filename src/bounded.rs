//! Fixed-capacity top-N collector
//!
//! [`BoundedHeap`] keeps the N best entries seen so far, where "best" is
//! either the smallest or the largest keys. It is a thin policy layer over
//! [`MinMaxHeap::push_min_n`] and [`MinMaxHeap::push_max_n`]: because the
//! min-max heap exposes both ends, the entry to evict and the entry to report
//! first are each one O(1) peek away.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::bounded::{BoundedHeap, Retain};
//!
//! let mut top = BoundedHeap::new(3, Retain::Largest);
//! for (score, name) in [(7, "g"), (2, "b"), (9, "i"), (4, "d"), (8, "h")] {
//!     top.offer(score, name);
//! }
//!
//! assert_eq!(top.into_sorted_vec(), vec![(9, "i"), (8, "h"), (7, "g")]);
//! ```

use crate::minmax::MinMaxHeap;

/// Which end of the key range a [`BoundedHeap`] keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Keep the N smallest keys
    Smallest,
    /// Keep the N largest keys
    Largest,
}

/// A min-max heap that never grows past a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedHeap<K: Ord, V> {
    heap: MinMaxHeap<K, V>,
    capacity: usize,
    retain: Retain,
}

impl<K: Ord, V> BoundedHeap<K, V> {
    /// Creates an empty collector keeping at most `capacity` entries
    pub fn new(capacity: usize, retain: Retain) -> Self {
        Self {
            heap: MinMaxHeap::with_capacity(capacity),
            capacity,
            retain,
        }
    }

    /// Offers an entry
    ///
    /// Returns the entry that did not make the cut: the evicted worst entry,
    /// the offered entry itself, or `None` while below capacity.
    pub fn offer(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.retain {
            Retain::Smallest => self.heap.push_min_n(key, value, self.capacity),
            Retain::Largest => self.heap.push_max_n(key, value, self.capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn retain(&self) -> Retain {
        self.retain
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The key a new entry has to match or beat once the collector is full
    ///
    /// `None` while there is still room.
    pub fn threshold(&self) -> Option<&K> {
        if !self.is_full() {
            return None;
        }
        let worst = match self.retain {
            Retain::Smallest => self.heap.peek_max(),
            Retain::Largest => self.heap.peek_min(),
        };
        worst.map(|(k, _)| k)
    }

    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.heap.peek_min()
    }

    pub fn peek_max(&self) -> Option<(&K, &V)> {
        self.heap.peek_max()
    }

    /// Consumes the collector, returning the entries best first
    ///
    /// Ascending for [`Retain::Smallest`], descending for [`Retain::Largest`].
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        let mut heap = self.heap;
        match self.retain {
            Retain::Smallest => heap.drain_min().collect(),
            Retain::Largest => heap.drain_max().collect(),
        }
    }

    /// Consumes the collector, returning the underlying heap
    pub fn into_inner(self) -> MinMaxHeap<K, V> {
        self.heap
    }
}

impl<K: Ord, V> Extend<(K, V)> for BoundedHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.offer(key, value);
        }
    }
}
