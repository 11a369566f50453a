//! Symmetric Min-Max Heap implementation
//!
//! A double-ended priority queue over a single flat array. Positions are
//! root-inclusive: position 0 is a virtual sentinel root that is never
//! stored, its children 1 and 2 hold the minimum and the maximum, and every
//! position `p` has children `2p + 1` (min side) and `2p + 2` (max side).
//!
//! Two properties hold for every stored position:
//!
//! - **Sibling order**: the left child of a pair never exceeds the right child.
//! - **Grandparent bracket**: a node at position `p >= 3` lies between the two
//!   children of its grandparent, `lnode <= p <= rnode`.
//!
//! Together they make the left spine a min-heap and the right spine a max-heap
//! over the same elements.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `push`         | O(log n)           |
//! | `pop_min`      | O(log n)           |
//! | `pop_max`      | O(log n)           |
//! | `peek_min/max` | O(1)               |
//! | `remove`       | O(log n)           |
//! | `update`       | O(log n)           |
//! | `push_min_n`   | O(log n)           |
//! | `from_parts`   | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::minmax::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for k in [12, 32, 25, 36, 13] {
//!     heap.push(k, k * 10);
//! }
//!
//! assert_eq!(heap.peek_min(), Some((&12, &120)));
//! assert_eq!(heap.peek_max(), Some((&36, &360)));
//! assert_eq!(heap.pop_max(), Some((36, 360)));
//! assert_eq!(heap.pop_min(), Some((12, 120)));
//! assert_eq!(heap.len(), 3);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::observer::{NoopObserver, SwapObserver};
use crate::traits::{DoubleEndedHeap, Heap, HeapError, MergeableHeap};

/// A symmetric min-max heap of (key, value) pairs
///
/// The observer type `O` is told about every position exchange; the default
/// [`NoopObserver`] compiles away.
#[derive(Clone)]
pub struct MinMaxHeap<K, V, O = NoopObserver> {
    /// Position `p` is stored at `data[p - 1]`
    data: Vec<(K, V)>,
    observer: O,
}

impl<K: Ord, V> MinMaxHeap<K, V> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            observer: NoopObserver,
        }
    }

    /// Builds a heap from parallel key and value vectors in O(n)
    ///
    /// # Panics
    ///
    /// Panics if `keys` and `values` have different lengths.
    pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        match Self::try_from_parts(keys, values) {
            Ok(heap) => heap,
            Err(err) => panic!("MinMaxHeap::from_parts: {err}"),
        }
    }

    /// Builds a heap from parallel key and value vectors in O(n)
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::LengthMismatch`] if the vectors differ in length.
    pub fn try_from_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, HeapError> {
        MinMaxHeapBuilder::new().parts(keys, values).try_build()
    }

    /// Returns a builder for configuring capacity, initial contents and observer
    pub fn builder() -> MinMaxHeapBuilder<K, V> {
        MinMaxHeapBuilder::new()
    }
}

impl<K: Ord, V, O: SwapObserver<V>> MinMaxHeap<K, V, O> {
    /// Creates an empty heap reporting exchanges to `observer`
    pub fn with_observer(observer: O) -> Self {
        Self {
            data: Vec::new(),
            observer,
        }
    }
}

impl<K, V, O> MinMaxHeap<K, V, O> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element. The observer is not notified.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the pair stored at root-inclusive position `pos`
    ///
    /// Position 1 is the minimum and position 2 the maximum. Returns `None`
    /// for position 0 and for positions past the end.
    pub fn get(&self, pos: usize) -> Option<(&K, &V)> {
        pos.checked_sub(1)
            .and_then(|slot| self.data.get(slot))
            .map(|(k, v)| (k, v))
    }

    /// Iterates over the pairs in storage order (position 1 first)
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns a mutable reference to the observer
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the heap, returning the pairs in storage order
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.data
    }
}

impl<K: Ord, V, O: SwapObserver<V>> MinMaxHeap<K, V, O> {
    /// Returns the minimum key and its value
    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.data.first().map(|(k, v)| (k, v))
    }

    /// Returns the maximum key and its value
    ///
    /// With a single element the minimum is also the maximum.
    pub fn peek_max(&self) -> Option<(&K, &V)> {
        self.data.get(1).or(self.data.first()).map(|(k, v)| (k, v))
    }

    /// Inserts a pair
    ///
    /// Equal keys are never exchanged, so a new duplicate stays where it lands.
    pub fn push(&mut self, key: K, value: V) {
        self.data.push((key, value));
        let mut pos = self.data.len();
        if pos == 1 {
            return;
        }
        if pos % 2 == 0 && self.key(pos - 1) > self.key(pos) {
            self.exchange(pos - 1, pos);
            pos -= 1;
        }
        self.sift_up(pos);
    }

    /// Removes and returns the pair with the minimum key
    ///
    /// Returns `None` on an empty heap.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let last = self.data.len();
        if last == 0 {
            return None;
        }
        self.exchange(1, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down_min(1);
        }
        min
    }

    /// Removes and returns the pair with the maximum key
    ///
    /// Returns `None` on an empty heap.
    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let last = self.data.len();
        if last <= 1 {
            return self.data.pop();
        }
        self.exchange(2, last);
        let max = self.data.pop();
        if last > 2 {
            self.sift_down_max(2);
        }
        max
    }

    /// Removes the pair at root-inclusive position `pos`
    ///
    /// Position 0 (the sentinel root) and positions past the end are ignored
    /// and yield `None`.
    pub fn remove(&mut self, pos: usize) -> Option<(K, V)> {
        let last = self.data.len();
        if pos == 0 || pos > last {
            return None;
        }
        self.exchange(pos, last);
        let removed = self.data.pop();
        if pos < last {
            self.restore(pos);
        }
        removed
    }

    /// Replaces the pair at root-inclusive position `pos`, returning the old pair
    ///
    /// Position 0 and positions past the end are ignored: the new pair is
    /// dropped and `None` is returned.
    pub fn update(&mut self, pos: usize, key: K, value: V) -> Option<(K, V)> {
        if pos == 0 || pos > self.data.len() {
            return None;
        }
        let old = std::mem::replace(&mut self.data[pos - 1], (key, value));
        self.restore(pos);
        Some(old)
    }

    /// Pushes while keeping only the `n` smallest keys
    ///
    /// Below capacity this is [`push`](Self::push). At capacity a key greater
    /// than the current maximum is discarded, otherwise the maximum is evicted
    /// to make room. Returns whichever pair left: the evicted maximum, the
    /// discarded input, or `None` when nothing was dropped.
    pub fn push_min_n(&mut self, key: K, value: V, n: usize) -> Option<(K, V)> {
        if self.data.len() < n {
            self.push(key, value);
            return None;
        }
        let admit = matches!(self.peek_max(), Some((max, _)) if key <= *max);
        if !admit {
            trace!("push_min_n: discarding key above current maximum (n = {n})");
            return Some((key, value));
        }
        let evicted = self.pop_max();
        self.push(key, value);
        trace!("push_min_n: evicted maximum to admit new key (n = {n})");
        evicted
    }

    /// Pushes while keeping only the `n` largest keys
    ///
    /// Mirror image of [`push_min_n`](Self::push_min_n): at capacity a key
    /// less than the current minimum is discarded, otherwise the minimum is
    /// evicted.
    pub fn push_max_n(&mut self, key: K, value: V, n: usize) -> Option<(K, V)> {
        if self.data.len() < n {
            self.push(key, value);
            return None;
        }
        let admit = matches!(self.peek_min(), Some((min, _)) if key >= *min);
        if !admit {
            trace!("push_max_n: discarding key below current minimum (n = {n})");
            return Some((key, value));
        }
        let evicted = self.pop_min();
        self.push(key, value);
        trace!("push_max_n: evicted minimum to admit new key (n = {n})");
        evicted
    }

    /// Pops minimums until the heap is empty
    pub fn drain_min(&mut self) -> DrainMin<'_, K, V, O> {
        DrainMin { heap: self }
    }

    /// Pops maximums until the heap is empty
    pub fn drain_max(&mut self) -> DrainMax<'_, K, V, O> {
        DrainMax { heap: self }
    }

    /// Consumes the heap, returning its pairs in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(pair) = self.pop_min() {
            sorted.push(pair);
        }
        sorted
    }

    /// Checks sibling order and the grandparent bracket at every position
    pub fn verify_invariants(&self) -> bool {
        let last = self.data.len();
        let siblings_ordered = (1..last)
            .step_by(2)
            .all(|left| self.key(left) <= self.key(left + 1));
        siblings_ordered
            && (3..=last).all(|pos| {
                let (lo, hi) = grandparent_pair(pos);
                self.key(lo) <= self.key(pos) && self.key(pos) <= self.key(hi)
            })
    }

    #[inline]
    fn key(&self, pos: usize) -> &K {
        &self.data[pos - 1].0
    }

    /// Exchanges two positions and reports the move
    fn exchange(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i - 1, j - 1);
        self.observer
            .swapped(&self.data[i - 1].1, &self.data[j - 1].1, i, j);
    }

    /// Restores both properties after an arbitrary pair was placed at `pos`
    ///
    /// Repairs the sibling pair first; whichever element lands on the other
    /// side only ever needs to move up. Otherwise tries downward, then upward.
    fn restore(&mut self, pos: usize) {
        let last = self.data.len();
        if pos % 2 == 1 {
            if pos < last && self.key(pos) > self.key(pos + 1) {
                self.exchange(pos, pos + 1);
                self.sift_down_min(pos);
                self.sift_up(pos + 1);
            } else if !self.sift_down_min(pos) {
                self.sift_up(pos);
            }
        } else if self.key(pos) < self.key(pos - 1) {
            self.exchange(pos - 1, pos);
            self.sift_down_max(pos);
            self.sift_up(pos - 1);
        } else if !self.sift_down_max(pos) {
            self.sift_up(pos);
        }
    }

    /// Climbs through grandparent pairs while the bracket is violated
    fn sift_up(&mut self, mut pos: usize) {
        while pos >= 3 {
            let (lo, hi) = grandparent_pair(pos);
            if self.key(pos) < self.key(lo) {
                self.exchange(pos, lo);
                pos = lo;
            } else if self.key(pos) > self.key(hi) {
                self.exchange(pos, hi);
                pos = hi;
            } else {
                break;
            }
        }
    }

    /// Sinks the element at odd position `pos` down the min side
    ///
    /// The candidates at each level are the left children of `pos` and of its
    /// sibling. Returns whether anything moved.
    fn sift_down_min(&mut self, mut pos: usize) -> bool {
        let last = self.data.len();
        let mut moved = false;
        loop {
            if pos < last && self.key(pos) > self.key(pos + 1) {
                self.exchange(pos, pos + 1);
                moved = true;
            }
            let mut child = 2 * pos + 1;
            if child > last {
                break;
            }
            let cousin = 2 * pos + 3;
            if cousin <= last && self.key(cousin) < self.key(child) {
                child = cousin;
            }
            if self.key(child) < self.key(pos) {
                self.exchange(pos, child);
                pos = child;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    /// Sinks the element at even position `pos` down the max side
    ///
    /// The candidates are the right children of `pos - 1` and of `pos`; at the
    /// tail of the array a lone left child stands in for its missing sibling.
    fn sift_down_max(&mut self, mut pos: usize) -> bool {
        let last = self.data.len();
        let mut moved = false;
        loop {
            if self.key(pos - 1) > self.key(pos) {
                self.exchange(pos - 1, pos);
                moved = true;
            }
            let Some(mut child) = pair_max(2 * pos - 1, last) else {
                break;
            };
            if let Some(other) = pair_max(2 * pos + 1, last) {
                if self.key(other) > self.key(child) {
                    child = other;
                }
            }
            if self.key(child) > self.key(pos) {
                self.exchange(pos, child);
                pos = child;
                moved = true;
                // A lone left child is a leaf
                if pos % 2 == 1 {
                    break;
                }
            } else {
                break;
            }
        }
        moved
    }

    /// Bottom-up construction: every pair, deepest first, sinks its maximum
    /// and then its minimum.
    fn heapify(&mut self) {
        for pos in (1..=self.data.len()).rev() {
            if pos % 2 == 0 {
                self.sift_down_max(pos);
            } else {
                self.sift_down_min(pos);
            }
        }
        debug!("heapified {} elements", self.data.len());
    }
}

/// Returns the min-side and max-side children of `pos`'s grandparent
#[inline]
fn grandparent_pair(pos: usize) -> (usize, usize) {
    let grandparent = (pos + 1) / 4 - 1;
    (2 * grandparent + 1, 2 * grandparent + 2)
}

/// The max-side member of the pair starting at `left`, if any
#[inline]
fn pair_max(left: usize, last: usize) -> Option<usize> {
    if left < last {
        Some(left + 1)
    } else if left == last {
        Some(left)
    } else {
        None
    }
}

impl<K: Ord, V> Default for MinMaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for MinMaxHeap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxHeap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MinMaxHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self {
            data: iter.into_iter().collect(),
            observer: NoopObserver,
        };
        heap.heapify();
        heap
    }
}

impl<K: Ord, V, O: SwapObserver<V>> Extend<(K, V)> for MinMaxHeap<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<K: Ord, V> Heap<V, K> for MinMaxHeap<K, V> {
    fn new() -> Self {
        MinMaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: K, item: V) {
        MinMaxHeap::push(self, priority, item)
    }

    fn peek(&self) -> Option<(&K, &V)> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.pop_min()
    }
}

impl<K: Ord, V> DoubleEndedHeap<V, K> for MinMaxHeap<K, V> {
    fn peek_max(&self) -> Option<(&K, &V)> {
        MinMaxHeap::peek_max(self)
    }

    fn pop_max(&mut self) -> Option<(K, V)> {
        MinMaxHeap::pop_max(self)
    }
}

impl<K: Ord, V> MergeableHeap<V, K> for MinMaxHeap<K, V> {
    fn merge(&mut self, other: Self) {
        self.data.extend(other.data);
        self.heapify();
    }
}

/// Iterator returned by [`MinMaxHeap::drain_min`]
pub struct DrainMin<'a, K: Ord, V, O: SwapObserver<V>> {
    heap: &'a mut MinMaxHeap<K, V, O>,
}

impl<K: Ord, V, O: SwapObserver<V>> Iterator for DrainMin<'_, K, V, O> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<K: Ord, V, O: SwapObserver<V>> ExactSizeIterator for DrainMin<'_, K, V, O> {}
impl<K: Ord, V, O: SwapObserver<V>> FusedIterator for DrainMin<'_, K, V, O> {}

/// Iterator returned by [`MinMaxHeap::drain_max`]
pub struct DrainMax<'a, K: Ord, V, O: SwapObserver<V>> {
    heap: &'a mut MinMaxHeap<K, V, O>,
}

impl<K: Ord, V, O: SwapObserver<V>> Iterator for DrainMax<'_, K, V, O> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<K: Ord, V, O: SwapObserver<V>> ExactSizeIterator for DrainMax<'_, K, V, O> {}
impl<K: Ord, V, O: SwapObserver<V>> FusedIterator for DrainMax<'_, K, V, O> {}

/// Configures and builds a [`MinMaxHeap`]
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::minmax::MinMaxHeap;
///
/// let mut swaps = 0;
/// let heap = MinMaxHeap::builder()
///     .capacity(16)
///     .parts(vec![5, 1, 9, 3], vec!["e", "a", "i", "c"])
///     .observer(|_: &&str, _: &&str, _: usize, _: usize| swaps += 1)
///     .build();
///
/// assert_eq!(heap.peek_min(), Some((&1, &"a")));
/// assert_eq!(heap.peek_max(), Some((&9, &"i")));
/// assert!(heap.capacity() >= 16);
/// drop(heap);
/// assert!(swaps > 0);
/// ```
pub struct MinMaxHeapBuilder<K, V, O = NoopObserver> {
    capacity: usize,
    parts: Option<(Vec<K>, Vec<V>)>,
    observer: O,
}

impl<K: Ord, V> MinMaxHeapBuilder<K, V> {
    /// Creates a builder for an empty heap without an observer
    pub fn new() -> Self {
        Self {
            capacity: 0,
            parts: None,
            observer: NoopObserver,
        }
    }
}

impl<K: Ord, V> Default for MinMaxHeapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, O: SwapObserver<V>> MinMaxHeapBuilder<K, V, O> {
    /// Reserves room for at least `capacity` elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the heap with parallel key and value vectors, heapified on build
    pub fn parts(mut self, keys: Vec<K>, values: Vec<V>) -> Self {
        self.parts = Some((keys, values));
        self
    }

    /// Attaches an observer; it also sees the exchanges of the initial heapify
    pub fn observer<P: SwapObserver<V>>(self, observer: P) -> MinMaxHeapBuilder<K, V, P> {
        MinMaxHeapBuilder {
            capacity: self.capacity,
            parts: self.parts,
            observer,
        }
    }

    /// Builds the heap
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::LengthMismatch`] if the seeded vectors differ in
    /// length.
    pub fn try_build(self) -> Result<MinMaxHeap<K, V, O>, HeapError> {
        let (keys, values) = self.parts.unwrap_or_default();
        if keys.len() != values.len() {
            return Err(HeapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut data = Vec::with_capacity(self.capacity.max(keys.len()));
        data.extend(keys.into_iter().zip(values));
        let mut heap = MinMaxHeap {
            data,
            observer: self.observer,
        };
        if heap.len() > 1 {
            heap.heapify();
        }
        Ok(heap)
    }

    /// Builds the heap
    ///
    /// # Panics
    ///
    /// Panics if the seeded vectors differ in length.
    pub fn build(self) -> MinMaxHeap<K, V, O> {
        match self.try_build() {
            Ok(heap) => heap,
            Err(err) => panic!("MinMaxHeapBuilder::build: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternate(heap: &mut MinMaxHeap<i32, i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some((k, _)) = heap.pop_min() {
            out.push(k);
            if let Some((k, _)) = heap.pop_max() {
                out.push(k);
            }
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = MinMaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3, "three");
        heap.push(1, "one");
        heap.push(2, "two");

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some((&1, &"one")));
        assert_eq!(heap.peek_max(), Some((&3, &"three")));
        assert!(heap.verify_invariants());

        assert_eq!(heap.pop_min(), Some((1, "one")));
        assert_eq!(heap.pop_max(), Some((3, "three")));
        assert_eq!(heap.pop_max(), Some((2, "two")));
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn test_alternating_pops_interleave_sorted_orders() {
        let mut heap = MinMaxHeap::new();
        for k in [12, 32, 25, 36, 13, 23, 26, 42, 49, 7, 15, 63, 92, 5] {
            heap.push(k, k);
            assert!(heap.verify_invariants());
        }
        assert_eq!(
            alternate(&mut heap),
            vec![5, 92, 7, 63, 12, 49, 13, 42, 15, 36, 23, 32, 25, 26]
        );
    }

    #[test]
    fn test_from_parts_heapifies() {
        let keys = vec![12, 32, 25, 36, 13, 23, 26, 42, 49, 7, 15, 63, 92, 5];
        let values = keys.clone();
        let mut heap = MinMaxHeap::from_parts(keys, values);
        assert!(heap.verify_invariants());
        assert_eq!(
            alternate(&mut heap),
            vec![5, 92, 7, 63, 12, 49, 13, 42, 15, 36, 23, 32, 25, 26]
        );
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_from_parts_mismatch_panics() {
        let _ = MinMaxHeap::from_parts(vec![1, 2, 3], vec!["a"]);
    }

    #[test]
    fn test_try_from_parts_mismatch_errors() {
        let err = MinMaxHeap::try_from_parts(vec![1, 2], vec!["a"]).unwrap_err();
        assert_eq!(err, HeapError::LengthMismatch { keys: 2, values: 1 });
    }

    #[test]
    fn test_single_element_is_min_and_max() {
        let mut heap = MinMaxHeap::new();
        heap.push(4, 'x');
        assert_eq!(heap.peek_min(), Some((&4, &'x')));
        assert_eq!(heap.peek_max(), Some((&4, &'x')));
        assert_eq!(heap.pop_max(), Some((4, 'x')));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_two_elements_ordered() {
        let mut heap = MinMaxHeap::new();
        heap.push(9, 'b');
        heap.push(2, 'a');
        assert_eq!(heap.get(1), Some((&2, &'a')));
        assert_eq!(heap.get(2), Some((&9, &'b')));
        assert_eq!(heap.get(0), None);
        assert_eq!(heap.get(3), None);
    }

    #[test]
    fn test_remove_sentinel_and_out_of_range_are_noops() {
        let mut heap: MinMaxHeap<i32, i32> = (0..5).map(|i| (i, i)).collect();
        assert_eq!(heap.remove(0), None);
        assert_eq!(heap.remove(6), None);
        assert_eq!(heap.len(), 5);

        let mut empty: MinMaxHeap<i32, i32> = MinMaxHeap::new();
        assert_eq!(empty.remove(1), None);
        assert_eq!(empty.update(1, 3, 3), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_last_position_truncates() {
        let mut heap: MinMaxHeap<i32, i32> = MinMaxHeap::new();
        for i in 0..7 {
            heap.push(i, i);
        }
        let (k, _) = heap.remove(7).unwrap();
        assert_eq!(heap.len(), 6);
        assert!(heap.verify_invariants());
        let rest: Vec<i32> = heap.drain_min().map(|(k, _)| k).collect();
        let expected: Vec<i32> = (0..7).filter(|&i| i != k).collect();
        assert_eq!(rest, expected);
    }

    #[test]
    fn test_remove_every_position() {
        for size in 1..40 {
            for pos in 1..=size {
                let mut heap = MinMaxHeap::new();
                for i in 0..size {
                    heap.push(i, i);
                }
                let (removed, _) = heap.remove(pos).unwrap();
                assert!(heap.verify_invariants(), "size {size}, pos {pos}");
                let drained: Vec<usize> = heap.drain_min().map(|(k, _)| k).collect();
                let expected: Vec<usize> = (0..size).filter(|&i| i != removed).collect();
                assert_eq!(drained, expected, "size {size}, pos {pos}");
            }
        }
    }

    #[test]
    fn test_update_moves_both_ways() {
        let mut heap: MinMaxHeap<i32, &str> = MinMaxHeap::new();
        for (k, v) in [(10, "a"), (20, "b"), (30, "c"), (40, "d"), (50, "e"), (60, "f")] {
            heap.push(k, v);
        }

        let pos = (1..=heap.len()).find(|&p| heap.get(p) == Some((&30, &"c"))).unwrap();
        assert_eq!(heap.update(pos, 100, "c"), Some((30, "c")));
        assert!(heap.verify_invariants());
        assert_eq!(heap.peek_max(), Some((&100, &"c")));

        let pos = (1..=heap.len()).find(|&p| heap.get(p) == Some((&40, &"d"))).unwrap();
        heap.update(pos, -1, "d");
        assert!(heap.verify_invariants());
        assert_eq!(heap.peek_min(), Some((&-1, &"d")));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn test_update_sentinel_is_noop() {
        let mut heap: MinMaxHeap<i32, i32> = (0..3).map(|i| (i, i)).collect();
        assert_eq!(heap.update(0, -5, -5), None);
        assert_eq!(heap.update(4, -5, -5), None);
        assert_eq!(heap.peek_min(), Some((&0, &0)));
    }

    #[test]
    fn test_push_min_n_keeps_smallest() {
        let mut heap = MinMaxHeap::new();
        for k in [50, 10, 40, 20, 30, 5, 60] {
            heap.push_min_n(k, k, 3);
            assert!(heap.len() <= 3);
            assert!(heap.verify_invariants());
        }
        let kept: Vec<i32> = heap.drain_min().map(|(k, _)| k).collect();
        assert_eq!(kept, vec![5, 10, 20]);
    }

    #[test]
    fn test_push_min_n_reports_dropped_pair() {
        let mut heap = MinMaxHeap::new();
        assert_eq!(heap.push_min_n(1, 'a', 2), None);
        assert_eq!(heap.push_min_n(3, 'c', 2), None);
        assert_eq!(heap.push_min_n(9, 'z', 2), Some((9, 'z')));
        assert_eq!(heap.push_min_n(2, 'b', 2), Some((3, 'c')));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_push_max_n_keeps_largest() {
        let mut heap = MinMaxHeap::new();
        for k in [50, 10, 40, 20, 30, 5, 60] {
            heap.push_max_n(k, k, 3);
        }
        let kept: Vec<i32> = heap.drain_max().map(|(k, _)| k).collect();
        assert_eq!(kept, vec![60, 50, 40]);
    }

    #[test]
    fn test_bounded_push_with_zero_capacity_discards() {
        let mut heap = MinMaxHeap::new();
        assert_eq!(heap.push_min_n(1, 1, 0), Some((1, 1)));
        assert_eq!(heap.push_max_n(1, 1, 0), Some((1, 1)));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_keys_return_every_payload() {
        let mut heap = MinMaxHeap::new();
        for v in 0..20 {
            heap.push(7, v);
        }
        let mut payloads: Vec<i32> = heap.drain_max().map(|(_, v)| v).collect();
        payloads.sort_unstable();
        assert_eq!(payloads, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_observer_sees_exchanges() {
        let mut log = Vec::new();
        {
            let mut heap = MinMaxHeap::with_observer(|a: &char, b: &char, i: usize, j: usize| {
                log.push((*a, *b, i, j));
            });
            heap.push(2, 'b');
            heap.push(1, 'a');
        }
        assert_eq!(log, vec![('a', 'b', 1, 2)]);
    }

    #[test]
    fn test_merge_and_sorted_vec() {
        let mut heap1: MinMaxHeap<i32, ()> = [5, 1, 9].into_iter().map(|k| (k, ())).collect();
        let heap2: MinMaxHeap<i32, ()> = [4, 8, 0].into_iter().map(|k| (k, ())).collect();
        heap1.merge(heap2);
        assert!(heap1.verify_invariants());
        let keys: Vec<i32> = heap1.into_sorted_vec().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 4, 5, 8, 9]);
    }

    #[test]
    fn test_clear_and_builder_capacity() {
        let mut heap: MinMaxHeap<u8, u8> = MinMaxHeap::builder().capacity(32).build();
        assert!(heap.capacity() >= 32);
        heap.extend([(3, 3), (1, 1)]);
        assert_eq!(heap.len(), 2);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_max(), None);
    }
}
