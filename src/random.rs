use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

pub trait RandomGenerator: Default {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        items.get(self.next_index(items.len()))
    }
}

/// Draws from the thread-local generator of the `rand` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        rand::rng().random_range(0..len)
    }
}

/// A reproducible generator: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    rng: StdRng,
    seed: u64,
}

impl Default for SeededGenerator {
    fn default() -> Self {
        SeededGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        self.rng.random_range(0..len)
    }
}

impl SeededGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
