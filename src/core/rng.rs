//! Seedable randomness source for deck shuffling.
//!
//! Every `DeckRng` records the seed it started from, including ones drawn
//! from entropy, so any shuffle can be replayed by seeding a new RNG with
//! the same value.
//!
//! ## Usage
//!
//! ```
//! use uno_deck::core::DeckRng;
//!
//! let mut rng = DeckRng::new(42);
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//!
//! rng.shuffle(&mut a);
//! DeckRng::new(42).shuffle(&mut b);
//!
//! // Same seed, same permutation
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by [`Deck::shuffle_with`](crate::deck::Deck::shuffle_with).
///
/// Uses ChaCha8 for speed while keeping shuffles unbiased.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();

        DeckRng::new(7).shuffle(&mut a);
        DeckRng::new(7).shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();

        DeckRng::new(1).shuffle(&mut a);
        DeckRng::new(2).shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = DeckRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_entropy_shuffle_replays_from_seed() {
        let mut rng = DeckRng::from_entropy();
        let mut replay = DeckRng::new(rng.seed());

        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();
        rng.shuffle(&mut a);
        replay.shuffle(&mut b);

        assert_eq!(a, b);
    }
}
