//! Extreme stress tests that really push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_minmax_heaps::minmax::MinMaxHeap;
use rust_minmax_heaps::simple_binary::SimpleBinaryHeap;
use rust_minmax_heaps::tracked::TrackedMinMaxHeap;
use rust_minmax_heaps::{DoubleEndedHeap, Heap};

/// Test massive numbers of inserts and pops through the trait API
fn test_massive_operations<H: Heap<i32, i32>>() {
    let mut heap = H::new();

    for i in (0..1000).rev() {
        heap.push(i, i);
    }

    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.pop(), Some((i, i)));
    }

    assert!(heap.is_empty());
}

/// Test draining from both ends at once
fn test_two_ended_drain<H: DoubleEndedHeap<i32, i32>>() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i32> = (0..1001).collect();
    keys.shuffle(&mut rng);

    let mut heap = H::new();
    for k in keys {
        heap.push(k, -k);
    }

    for i in 0..500 {
        assert_eq!(heap.pop(), Some((i, -i)));
        assert_eq!(heap.pop_max(), Some((1000 - i, i - 1000)));
    }
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), heap.peek_max());
}

#[test]
fn test_minmax_massive_operations() {
    test_massive_operations::<MinMaxHeap<i32, i32>>();
}

#[test]
fn test_simple_binary_massive_operations() {
    test_massive_operations::<SimpleBinaryHeap<i32, i32>>();
}

#[test]
fn test_minmax_two_ended_drain() {
    test_two_ended_drain::<MinMaxHeap<i32, i32>>();
}

#[test]
fn test_random_permutations_alternate_pops() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1usize, 2, 3, 4, 5, 17, 64, 255, 1000] {
        let mut keys: Vec<usize> = (0..n).collect();
        keys.shuffle(&mut rng);
        let mut heap = MinMaxHeap::new();
        for k in keys {
            heap.push(k, ());
        }

        let (mut low, mut high) = (0, n);
        while !heap.is_empty() {
            assert_eq!(heap.pop_min().map(|(k, _)| k), Some(low));
            low += 1;
            if let Some((k, _)) = heap.pop_max() {
                high -= 1;
                assert_eq!(k, high);
            }
        }
        assert_eq!(low, high);
    }
}

#[test]
fn test_random_removals_and_updates() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut heap = MinMaxHeap::new();
    for i in 0..2000u32 {
        heap.push(rng.gen_range(0..500), i);
    }

    for round in 0..3000 {
        let pos = rng.gen_range(0..=heap.len() + 1);
        if round % 2 == 0 {
            heap.remove(pos);
        } else {
            heap.update(pos, rng.gen_range(0..500), round);
        }
        heap.push(rng.gen_range(0..500), round + 10_000);
        if round % 100 == 0 {
            assert!(heap.verify_invariants());
        }
    }
    assert!(heap.verify_invariants());

    let keys: Vec<i32> = heap.drain_min().map(|(k, _)| k).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_bounded_streaming() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut all = Vec::with_capacity(10_000);
    let mut top = MinMaxHeap::new();
    for i in 0..10_000u32 {
        let k: u64 = rng.gen();
        all.push(k);
        top.push_max_n(k, i, 25);
        assert!(top.len() <= 25);
    }

    all.sort_unstable_by(|a, b| b.cmp(a));
    let kept: Vec<u64> = top.drain_max().map(|(k, _)| k).collect();
    assert_eq!(kept, all[..25].to_vec());
}

#[test]
fn test_tracked_churn() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut heap = TrackedMinMaxHeap::new();
    for item in 0..500u32 {
        heap.push(rng.gen_range(0..100i64), item).unwrap();
    }
    for _ in 0..2000 {
        let item = rng.gen_range(0..500u32);
        if heap.contains(&item) {
            if rng.gen_bool(0.5) {
                heap.update_key(&item, rng.gen_range(-100..200)).unwrap();
            } else {
                heap.remove_item(&item);
            }
        } else {
            heap.push(rng.gen_range(0..100), item).unwrap();
        }
    }
    assert!(heap.verify_invariants());
}

/// The heap has no internal locking; shared use goes through one lock held
/// for each whole operation.
#[test]
fn test_shared_behind_mutex() {
    let heap = Arc::new(Mutex::new(MinMaxHeap::new()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let heap = Arc::clone(&heap);
            thread::spawn(move || {
                for i in 0..250 {
                    heap.lock().push(t * 1000 + i, t);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut heap = heap.lock();
    assert_eq!(heap.len(), 1000);
    assert!(heap.verify_invariants());
    assert_eq!(heap.pop_min(), Some((0, 0)));
    assert_eq!(heap.pop_max(), Some((3249, 3)));
}
