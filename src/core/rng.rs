//! Seeded randomness for dealing.
//!
//! Every deal draws from a `GameRng` forked off the controller's RNG.
//! A fork records its own seed, so any single deal can be replayed from
//! that seed alone without replaying the deals before it.
//!
//! ```
//! use memo_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deal_rng = rng.fork();
//! let mut replay = GameRng::new(deal_rng.seed());
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! deal_rng.shuffle(&mut a);
//! replay.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::shuffle::shuffle;

/// ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the thread RNG, for real play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this stream started from. Logged with each deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream seeded from the next value of this one.
    ///
    /// Successive forks differ; the same parent seed always yields the
    /// same sequence of forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    /// Shuffle a slice in place, returning it.
    pub fn shuffle<'a, T>(&mut self, slice: &'a mut [T]) -> &'a mut [T] {
        shuffle(&mut self.inner, slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, FacePool};
    use crate::core::GameConfig;

    fn deal(rng: &mut GameRng) -> Deck {
        let config = GameConfig::new(6, 4, 120).unwrap();
        Deck::for_config(&config, &FacePool::default_images(), rng).unwrap()
    }

    #[test]
    fn test_same_seed_same_deals() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..3 {
            assert_eq!(deal(&mut a.fork()), deal(&mut b.fork()));
        }
    }

    #[test]
    fn test_successive_forks_deal_differently() {
        let mut rng = GameRng::new(7);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
        assert_ne!(deal(&mut first.clone()).faces(), deal(&mut second.clone()).faces());
    }

    #[test]
    fn test_deal_replays_from_fork_seed() {
        let mut rng = GameRng::new(3);
        let _ = rng.fork();
        let mut third = rng.fork();
        let seed = third.seed();

        assert_eq!(deal(&mut third), deal(&mut GameRng::new(seed)));
    }

    #[test]
    fn test_different_seeds_different_deals() {
        assert_ne!(deal(&mut GameRng::new(1)).faces(), deal(&mut GameRng::new(2)).faces());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (1..=10).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }
}
