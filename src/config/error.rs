//! Configuration errors.

use thiserror::Error;

/// Environment could not be read into `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// A loaded value is outside what the engine accepts.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Default card count must be between 1 and 10, got {0}")]
    InvalidCardCount(usize),

    #[error("Reversal probability must be between 0 and 1, got {0}")]
    InvalidReversalProbability(f64),

    #[error("Age limits are inconsistent (adult {adult}, max {max})")]
    InvalidAgeLimits { adult: i32, max: i32 },

    #[error("Reading cache capacity must be positive")]
    InvalidCacheCapacity,
}
