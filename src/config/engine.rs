//! Reading engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::DEFAULT_READING_CAPACITY;
use crate::domain::cards::{MAX_DRAWN_CARDS, MIN_DRAWN_CARDS};

/// Engine configuration: reference data locations and reading defaults
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Card catalog JSON; the embedded catalog when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Lexicon YAML; the embedded lexicon when unset
    #[serde(default)]
    pub lexicon_path: Option<String>,

    /// Cards drawn when a request does not say
    #[serde(default = "default_card_count")]
    pub default_card_count: usize,

    /// Chance of each card landing reversed
    #[serde(default = "default_reversal_probability")]
    pub reversal_probability: f64,

    /// Younger querents get an entertainment-only warning
    #[serde(default = "default_adult_age")]
    pub adult_age: i32,

    /// Oldest accepted querent age
    #[serde(default = "default_max_age")]
    pub max_age: i32,

    /// Readings kept for lookup before the oldest is evicted
    #[serde(default = "default_cache_capacity")]
    pub reading_cache_capacity: usize,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_DRAWN_CARDS..=MAX_DRAWN_CARDS).contains(&self.default_card_count) {
            return Err(ValidationError::InvalidCardCount(self.default_card_count));
        }
        if !(0.0..=1.0).contains(&self.reversal_probability) {
            return Err(ValidationError::InvalidReversalProbability(
                self.reversal_probability,
            ));
        }
        if self.adult_age < 0 || self.max_age <= 0 || self.adult_age > self.max_age {
            return Err(ValidationError::InvalidAgeLimits {
                adult: self.adult_age,
                max: self.max_age,
            });
        }
        if self.reading_cache_capacity == 0 {
            return Err(ValidationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            lexicon_path: None,
            default_card_count: default_card_count(),
            reversal_probability: default_reversal_probability(),
            adult_age: default_adult_age(),
            max_age: default_max_age(),
            reading_cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_card_count() -> usize {
    3
}

fn default_reversal_probability() -> f64 {
    0.3
}

fn default_adult_age() -> i32 {
    18
}

fn default_max_age() -> i32 {
    150
}

fn default_cache_capacity() -> usize {
    DEFAULT_READING_CAPACITY
}
