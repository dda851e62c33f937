//! Seedable random source for reproducible matches.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A [`StdRng`] that remembers the seed it was built from.
///
/// Log the seed once and the whole match can be replayed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a fresh OS-derived seed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
