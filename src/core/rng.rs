//! Deterministic random number generation with forking for tree search.
//!
//! Every random decision in a game (seed infections, the infection draw after
//! each move, random policy choices) comes from a `GameRng`. Two games built
//! from the same seed and driven by the same moves are identical.
//!
//! ## Search Usage
//!
//! ```
//! use outbreak::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a search branch
//! let mut branch = rng.fork();
//!
//! // Original and fork produce different sequences
//! assert_ne!(rng.gen_range_usize(0..1000), branch.gen_range_usize(0..1000));
//! ```

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for search branches.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// The fork seed depends on the original seed, the number of forks taken
    /// so far and how far this stream has advanced. Forking twice from the
    /// same point gives two different streams; forking from the same point of
    /// an identically seeded RNG gives the same stream. The parent stream is
    /// not consumed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let pos = self.inner.get_word_pos();
        let position = mix((pos as u64) ^ ((pos >> 64) as u64));
        let base = self.seed ^ position;
        let fork_seed = mix(base.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15)));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random u64, e.g. to seed a fresh game.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Draw an index with probability proportional to `weights[i]`.
    ///
    /// `None` for an empty slice, all-zero weights or any negative weight.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.inner))
    }
}

/// SplitMix64 finalizer. Without it a fork of a fork would land on the same
/// seed as a later sibling of its parent.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
