//! Entropy adapters - ChaCha-backed pseudo-random generators.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ports::EntropySource;

/// Seedable ChaCha8 generators.
///
/// A fixed `default_seed` makes every unseeded draw reproducible, which
/// is what tests and demos want; production leaves it unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaChaEntropy {
    default_seed: Option<u64>,
}

impl ChaChaEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_seed(seed: u64) -> Self {
        Self {
            default_seed: Some(seed),
        }
    }
}

impl EntropySource for ChaChaEntropy {
    fn rng(&self, seed: Option<u64>) -> Box<dyn RngCore + Send> {
        match seed.or(self.default_seed) {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(ChaCha8Rng::from_entropy()),
        }
    }
}
