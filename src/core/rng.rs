//! Deterministic random number generation.
//!
//! A game session draws all of its randomness (deck fill, shuffle, random
//! draws when dealing hands, random agents) from a single `GameRng`.
//!
//! ## Key Features
//!
//! - One seed reproduces the whole game
//! - `from_entropy` picks a fresh seed but still records it, so an
//!   unseeded console session can be replayed
//!
//! ```
//! use pokemon_tcg::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..60), b.gen_range_usize(0..60));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG shared by one game session.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick a uniformly random index into a collection of `len` items.
    ///
    /// Returns `None` if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        let draws_a: Vec<_> = (0..60).map(|_| a.gen_range_usize(0..4)).collect();
        let draws_b: Vec<_> = (0..60).map(|_| b.gen_range_usize(0..4)).collect();

        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let picks_a: Vec<_> = (0..20).map(|_| a.gen_range_usize(0..60)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.gen_range_usize(0..60)).collect();

        assert_ne!(picks_a, picks_b);
    }

    #[test]
    fn test_gen_index() {
        let mut rng = GameRng::new(7);

        assert_eq!(rng.gen_index(0), None);
        assert_eq!(rng.gen_index(1), Some(0));
        assert!((0..50).all(|_| rng.gen_index(4).is_some_and(|i| i < 4)));
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = GameRng::new(42);
        let mut slots: Vec<u32> = (0..60).collect();

        rng.shuffle(&mut slots);
        assert_ne!(slots, (0..60).collect::<Vec<_>>());

        slots.sort_unstable();
        assert_eq!(slots, (0..60).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose_from_empty() {
        let mut rng = GameRng::new(3);
        let none: [u8; 0] = [];

        assert_eq!(rng.choose(&none), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let mut original = GameRng::from_entropy();
        let mut replay = GameRng::new(original.seed());

        assert_eq!(original.gen_range_usize(0..1000), replay.gen_range_usize(0..1000));
    }
}
