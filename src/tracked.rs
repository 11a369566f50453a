//! Min-max heap with item → position tracking
//!
//! [`TrackedMinMaxHeap`] attaches a [`PositionMap`] observer to a
//! [`MinMaxHeap`] so every stored item can be located in O(1). That makes
//! item-addressed operations possible: change an item's key, or remove an
//! item wherever it currently sits.
//!
//! The observer alone only sees exchanges. The wrapper does the rest of the
//! bookkeeping: it registers an item before it is pushed and forgets it once
//! a pop or removal hands it back.
//!
//! Items must be unique within one heap.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::tracked::TrackedMinMaxHeap;
//!
//! let mut heap = TrackedMinMaxHeap::new();
//! heap.push(30, "carol").unwrap();
//! heap.push(10, "alice").unwrap();
//! heap.push(20, "bob").unwrap();
//!
//! heap.update_key(&"carol", 5).unwrap();
//! assert_eq!(heap.peek_min(), Some((&5, &"carol")));
//!
//! assert_eq!(heap.remove_item(&"alice"), Some((10, "alice")));
//! assert_eq!(heap.pop_max(), Some((20, "bob")));
//! ```

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::minmax::MinMaxHeap;
use crate::observer::SwapObserver;
use crate::traits::HeapError;

/// Observer keeping a map from item to its current heap position
#[derive(Debug, Clone)]
pub struct PositionMap<V> {
    positions: FxHashMap<V, usize>,
}

impl<V: Hash + Eq> PositionMap<V> {
    fn new() -> Self {
        Self {
            positions: FxHashMap::default(),
        }
    }

    /// Root-inclusive position of `item`, if tracked
    pub fn get(&self, item: &V) -> Option<usize> {
        self.positions.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<V: Hash + Eq> SwapObserver<V> for PositionMap<V> {
    fn swapped(&mut self, a: &V, b: &V, i: usize, j: usize) {
        if let Some(pos) = self.positions.get_mut(a) {
            *pos = i;
        }
        if let Some(pos) = self.positions.get_mut(b) {
            *pos = j;
        }
    }
}

/// A [`MinMaxHeap`] that knows where each of its items is stored
#[derive(Debug, Clone)]
pub struct TrackedMinMaxHeap<K, V> {
    heap: MinMaxHeap<K, V, PositionMap<V>>,
}

impl<K: Ord, V: Hash + Eq + Clone> TrackedMinMaxHeap<K, V> {
    pub fn new() -> Self {
        Self {
            heap: MinMaxHeap::with_observer(PositionMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Root-inclusive position of `item`, if stored
    pub fn position(&self, item: &V) -> Option<usize> {
        self.heap.observer().get(item)
    }

    pub fn contains(&self, item: &V) -> bool {
        self.position(item).is_some()
    }

    /// Current key of `item`, if stored
    pub fn key_of(&self, item: &V) -> Option<&K> {
        let pos = self.position(item)?;
        self.heap.get(pos).map(|(k, _)| k)
    }

    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.heap.peek_min()
    }

    pub fn peek_max(&self) -> Option<(&K, &V)> {
        self.heap.peek_max()
    }

    /// Inserts `item` with `key`
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::DuplicateItem`] if `item` is already stored.
    pub fn push(&mut self, key: K, item: V) -> Result<(), HeapError> {
        if self.contains(&item) {
            return Err(HeapError::DuplicateItem);
        }
        let pos = self.heap.len() + 1;
        self.heap.observer_mut().positions.insert(item.clone(), pos);
        self.heap.push(key, item);
        Ok(())
    }

    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let popped = self.heap.pop_min();
        self.forget(popped)
    }

    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let popped = self.heap.pop_max();
        self.forget(popped)
    }

    /// Removes `item` wherever it is stored
    pub fn remove_item(&mut self, item: &V) -> Option<(K, V)> {
        let pos = self.position(item)?;
        let removed = self.heap.remove(pos);
        self.forget(removed)
    }

    /// Changes the key of a stored item, returning its previous key
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::UnknownItem`] if `item` is not stored.
    pub fn update_key(&mut self, item: &V, key: K) -> Result<K, HeapError> {
        let pos = self.position(item).ok_or(HeapError::UnknownItem)?;
        let (old_key, _) = self
            .heap
            .update(pos, key, item.clone())
            .ok_or(HeapError::UnknownItem)?;
        Ok(old_key)
    }

    /// Checks the heap invariants and that every tracked position is accurate
    pub fn verify_invariants(&self) -> bool {
        let map = self.heap.observer();
        self.heap.verify_invariants()
            && map.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, (_, item))| map.get(item) == Some(slot + 1))
    }

    fn forget(&mut self, pair: Option<(K, V)>) -> Option<(K, V)> {
        if let Some((_, item)) = &pair {
            self.heap.observer_mut().positions.remove(item);
        }
        pair
    }
}

impl<K: Ord, V: Hash + Eq + Clone> Default for TrackedMinMaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Hash + Eq + Clone> FromIterator<(K, V)> for TrackedMinMaxHeap<K, V> {
    /// Bulk-builds the heap and indexes it once; later duplicates of an item
    /// are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut seen = FxHashSet::default();
        let (keys, values): (Vec<K>, Vec<V>) = iter
            .into_iter()
            .filter(|(_, item)| seen.insert(item.clone()))
            .unzip();
        let mut heap = MinMaxHeap::builder()
            .parts(keys, values)
            .observer(PositionMap::new())
            .build();
        let positions = heap
            .iter()
            .enumerate()
            .map(|(slot, (_, item))| (item.clone(), slot + 1))
            .collect();
        heap.observer_mut().positions = positions;
        Self { heap }
    }
}
