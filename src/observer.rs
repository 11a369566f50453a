//! Swap observers for [`MinMaxHeap`](crate::minmax::MinMaxHeap)
//!
//! Every element movement inside the min-max heap is an exchange of two
//! positions. An observer attached to the heap is told about each exchange,
//! which is enough for an external collaborator to keep a parallel
//! item → position index (see [`crate::tracked`]).
//!
//! Observers are not told about the final truncation of a pop or removal:
//! the element leaving the heap is reported by the operation's return value.

/// Receives every position exchange performed by a heap
pub trait SwapObserver<V> {
    /// Called after positions `i` and `j` were exchanged
    ///
    /// After the exchange `a` sits at position `i` and `b` at position `j`.
    /// Positions are root-inclusive: the minimum lives at 1, the maximum at 2.
    fn swapped(&mut self, a: &V, b: &V, i: usize, j: usize);
}

/// Observer that ignores every exchange
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<V> SwapObserver<V> for NoopObserver {
    #[inline(always)]
    fn swapped(&mut self, _a: &V, _b: &V, _i: usize, _j: usize) {}
}

impl<V, F> SwapObserver<V> for F
where
    F: FnMut(&V, &V, usize, usize),
{
    fn swapped(&mut self, a: &V, b: &V, i: usize, j: usize) {
        self(a, b, i, j)
    }
}
