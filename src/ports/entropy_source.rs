//! EntropySource port - the only place randomness enters a reading.

use rand::RngCore;

/// Hands out pseudo-random generators for card selection.
///
/// A `Some(seed)` must yield the same sequence every time so that a
/// request carrying a seed draws the same cards. `None` asks for a fresh,
/// unpredictable generator.
pub trait EntropySource: Send + Sync {
    fn rng(&self, seed: Option<u64>) -> Box<dyn RngCore + Send>;
}
