//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARCANA` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working service.
//!
//! # Example
//!
//! ```no_run
//! use arcana::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod engine;
mod error;
mod features;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::application::handlers::reading::ReadingPolicy;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Reading engine configuration (reference data, defaults, limits)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARCANA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARCANA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ARCANA__ENGINE__DEFAULT_CARD_COUNT=5` -> `engine.default_card_count = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCANA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.engine.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Reading generation settings derived from engine config and flags.
    pub fn reading_policy(&self) -> ReadingPolicy {
        ReadingPolicy {
            default_card_count: self.engine.default_card_count,
            reversals_enabled: self.features.enable_reversals,
            reversal_probability: self.engine.reversal_probability,
            adult_age: self.engine.adult_age,
            max_age: self.engine.max_age,
            cache_readings: self.features.enable_reading_cache,
        }
    }
}
