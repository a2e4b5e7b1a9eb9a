//! Workloads shared by the cook benchmarks.
//!
//! - [`key_stream`]: seeded, reproducible non-zero table keys
//! - [`deque_script`]: seeded mix of end operations for the deque

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a deque workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DequeOp {
    /// Push the value at the front.
    PushFront(u64),
    /// Push the value at the back.
    PushBack(u64),
    /// Pop from the front.
    PopFront,
    /// Pop from the back.
    PopBack,
}

/// Generate `n` pseudo-random non-zero keys from `seed`.
///
/// Keys may repeat; a table fed this stream sees a mix of inserts and
/// updates.
pub fn key_stream(seed: u64, n: usize) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32() | 1).collect()
}

/// Generate `n` deque operations, roughly 60% pushes, from `seed`.
///
/// Pushes outnumber pops, so the deque grows and wraps during a run.
pub fn deque_script(seed: u64, n: usize) -> Vec<DequeOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let roll = rng.next_u32() % 10;
            let value = i as u64;
            match roll {
                0..=2 => DequeOp::PushFront(value),
                3..=5 => DequeOp::PushBack(value),
                6..=7 => DequeOp::PopFront,
                _ => DequeOp::PopBack,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_stream_is_deterministic_and_non_zero() {
        let a = key_stream(42, 1000);
        let b = key_stream(42, 1000);
        assert_eq!(a, b);
        assert!(a.iter().all(|&k| k != 0));
        assert_ne!(a, key_stream(43, 1000));
    }

    #[test]
    fn deque_script_is_push_heavy() {
        let script = deque_script(7, 10_000);
        let pushes = script
            .iter()
            .filter(|op| matches!(op, DequeOp::PushFront(_) | DequeOp::PushBack(_)))
            .count();
        assert!(pushes > 5_000, "{pushes} pushes");
        assert_eq!(script, deque_script(7, 10_000));
    }
}
