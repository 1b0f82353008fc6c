//! Deterministic random number generation with forking per session.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each reading session gets an independent branch
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use tarot_engine::core::ReadingRng;
//!
//! let mut rng = ReadingRng::new(42);
//!
//! // Fork for a new session
//! let mut session_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let original: Vec<_> = (0..8).map(|_| rng.gen_index(100)).collect();
//! let forked: Vec<_> = (0..8).map(|_| session_rng.gen_index(100)).collect();
//! assert_ne!(original, forked);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG, forked once per reading session.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// All shuffle-fairness and reversal-probability guarantees are stated
/// against this generator.
#[derive(Clone, Debug)]
pub struct ReadingRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ReadingRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Use at composition roots; tests should prefer [`ReadingRng::new`]
    /// with a fixed seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. The flow
    /// forks its master RNG once per session so concurrent histories never
    /// share a stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Generate a random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Draw a uniformly random `count`-subset without replacement.
    ///
    /// Returns the subset in random order. Panics if `count` exceeds the
    /// source length; callers validate sizes first.
    #[must_use]
    pub fn sample<T: Clone>(&mut self, source: &[T], count: usize) -> Vec<T> {
        assert!(
            count <= source.len(),
            "sample count {} exceeds source length {}",
            count,
            source.len()
        );
        let mut pool: Vec<T> = source.to_vec();
        self.shuffle(&mut pool);
        pool.truncate(count);
        pool
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ReadingRngState {
        ReadingRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ReadingRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for suspending a session.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = ReadingRng::new(42);
        let mut rng2 = ReadingRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = ReadingRng::new(1);
        let mut rng2 = ReadingRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = ReadingRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = ReadingRng::new(42);
        let mut rng2 = ReadingRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = ReadingRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_sample_without_replacement() {
        let mut rng = ReadingRng::new(42);
        let source: Vec<u32> = (0..78).collect();

        let subset = rng.sample(&source, 12);
        assert_eq!(subset.len(), 12);

        let mut sorted = subset.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 12, "subset contains duplicates");
    }

    #[test]
    fn test_sample_full_length() {
        let mut rng = ReadingRng::new(7);
        let source = vec![1, 2, 3];
        let mut subset = rng.sample(&source, 3);
        subset.sort();
        assert_eq!(subset, source);
    }

    #[test]
    fn test_state_roundtrip() {
        let mut rng = ReadingRng::new(42);

        for _ in 0..100 {
            rng.gen_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();

        let mut restored = ReadingRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = ReadingRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ReadingRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
