//! The single random stream threaded through every generation step.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct LevelRng {
    rng: ChaCha8Rng,
}

impl LevelRng {
    pub fn from_seed(seed: i32) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(u64::from(seed as u32)) }
    }

    /// Uniform draw from `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.rng.next_u64() % bound as u64) as usize
    }

    pub fn roll_percent(&mut self, percent: u32) -> bool {
        (self.below(100) as u32) < percent
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len());
        items.get(index)
    }
}
