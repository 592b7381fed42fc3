// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Explicitly owned pseudorandom source.
//!
//! One instance is created per run and passed by `&mut` into the generator and
//! into randomized quicksort. Seeding it once makes a whole run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source shared by the generator and randomized quicksort.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomSource {
    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Create a deterministic source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a seeded source when a seed is given, an entropy-seeded one otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this source was created with, if it is deterministic.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }

    /// Uniform index in `[low, high]`, both inclusive.
    pub fn index_between(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
