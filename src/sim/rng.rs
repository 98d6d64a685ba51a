//! Injectable randomness
//!
//! The simulation never touches an ambient generator. AI fire rolls and spawn
//! placement draw from a [`RandomSource`] handed in by the caller.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Seeded PCG generator (reproducible across platforms)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}
