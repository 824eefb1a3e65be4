//! Seeded randomness for shuffling and random strategies.
//!
//! Every source of randomness in a round owns its own `GameRng`; nothing
//! reads process-wide random state after construction. Two rounds built from
//! the same seeds play out identically and can run side by side in tests.
//!
//! ```
//! use skyjo_engine::core::GameRng;
//!
//! let mut table = GameRng::new(42);
//!
//! // One stream per player strategy
//! let mut alice = table.fork();
//! let mut bob = table.fork();
//! assert_ne!(alice.seed(), bob.seed());
//!
//! // Same seed, same forks
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.fork().seed(), alice.seed());
//! # let _ = (alice.gen_bool(0.5), bob.gen_bool(0.5));
//! ```

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio step between fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed from the operating system. `seed()` still reports the pick, so
    /// an unseeded round can be logged and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// `Some(seed)` is reproducible, `None` falls back to entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child stream. The n-th fork of a given seed is always the
    /// same, and does not advance this stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// `amount` distinct indices into `0..len`, in random order, or `None`
    /// if `amount > len`.
    pub fn sample_distinct(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        (amount <= len).then(|| index::sample(&mut self.inner, len, amount).into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut cells: Vec<u8> = (0..12).collect();
        rng.shuffle(&mut cells);
        cells
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        assert_eq!(shuffled(&mut GameRng::new(42)), shuffled(&mut GameRng::new(42)));
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut cells = shuffled(&mut GameRng::new(7));
        cells.sort_unstable();
        assert_eq!(cells, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_forks_replay_and_differ() {
        let mut table = GameRng::new(42);
        let mut replay = GameRng::new(42);

        let mut alice = table.fork();
        let mut bob = table.fork();
        let mut alice_again = replay.fork();

        let a = shuffled(&mut alice);
        assert_eq!(a, shuffled(&mut alice_again));
        assert_ne!(a, shuffled(&mut bob));
    }

    #[test]
    fn test_fork_does_not_advance_parent() {
        let mut forked = GameRng::new(3);
        let _ = forked.fork();
        assert_eq!(shuffled(&mut forked), shuffled(&mut GameRng::new(3)));
    }

    #[test]
    fn test_from_seed() {
        assert_eq!(GameRng::from_seed(Some(7)).seed(), 7);

        let picked = GameRng::from_seed(None);
        let mut a = picked.clone();
        let mut b = GameRng::new(picked.seed());
        assert_eq!(shuffled(&mut a), shuffled(&mut b));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let values = [-2i8, 0, 12];
        assert!(values.contains(rng.choose(&values).unwrap()));
        assert!(rng.choose::<i8>(&[]).is_none());
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let picked = rng.sample_distinct(12, 2).unwrap();
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|&i| i < 12));
        }

        assert_eq!(rng.sample_distinct(2, 2).map(|v| v.len()), Some(2));
        assert_eq!(rng.sample_distinct(1, 2), None);
    }
}
