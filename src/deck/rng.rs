//! Deterministic random number generation for draws.
//!
//! Same seed, same draw sequence: tests replay an entire shuffle cycle
//! from a fixed seed. Production engines seed from system entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic draw RNG.
///
/// Wraps ChaCha8 for speed with reproducible output.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
