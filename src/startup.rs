//! Service wiring: reference data, handlers and the HTTP router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::http::{reading_routes, ReadingHandlers};
use crate::adapters::{
    CatalogError, ChaChaEntropy, InMemoryReadingStore, JsonCardCatalog, SystemClock,
};
use crate::application::handlers::reading::{
    AnalyzeCombinationHandler, ComputeProfileHandler, GenerateReadingHandler, GetReadingHandler,
};
use crate::config::{AppConfig, EngineConfig, ValidationError};
use crate::domain::lexicon::{Lexicon, LexiconError};
use crate::ports::{CardCatalog, Clock, EntropySource};

/// Errors that stop the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Card catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Lexicon unavailable: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Loads the catalog and lexicon named in `engine`, falling back to the
/// embedded copies.
pub fn load_reference_data(
    engine: &EngineConfig,
) -> Result<(Arc<dyn CardCatalog>, Arc<Lexicon>), StartupError> {
    let catalog = match &engine.catalog_path {
        Some(path) => JsonCardCatalog::from_path(path)?,
        None => JsonCardCatalog::builtin()?,
    };
    let lexicon = match &engine.lexicon_path {
        Some(path) => Arc::new(Lexicon::from_path(path)?),
        None => Lexicon::builtin(),
    };
    info!(
        cards = catalog.len(),
        catalog = engine.catalog_path.as_deref().unwrap_or("builtin"),
        lexicon = engine.lexicon_path.as_deref().unwrap_or("builtin"),
        "Reference data loaded"
    );
    let catalog: Arc<dyn CardCatalog> = Arc::new(catalog);
    Ok((catalog, lexicon))
}

/// Builds the HTTP handler state over the given clock and entropy source.
pub fn build_handlers(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn EntropySource>,
) -> Result<ReadingHandlers, StartupError> {
    config.validate()?;
    let (catalog, lexicon) = load_reference_data(&config.engine)?;
    let store = Arc::new(InMemoryReadingStore::with_capacity(
        config.engine.reading_cache_capacity,
    ));
    let policy = config.reading_policy();

    let generate = GenerateReadingHandler::new(
        Arc::clone(&catalog),
        Arc::clone(&lexicon),
        entropy,
        Arc::clone(&clock),
        store.clone(),
        policy.clone(),
    );
    let profile = ComputeProfileHandler::new(clock, policy);
    let analyze = AnalyzeCombinationHandler::new(Arc::clone(&catalog), lexicon);
    let get = GetReadingHandler::new(store);

    Ok(ReadingHandlers::new(
        Arc::new(generate),
        Arc::new(profile),
        Arc::new(analyze),
        Arc::new(get),
        catalog,
    )
    .with_verbose_errors(config.features.verbose_errors))
}

/// Production router: system clock, OS-seeded entropy, tracing, timeout
/// and CORS layers.
pub fn build_router(config: &AppConfig) -> Result<Router, StartupError> {
    let handlers = build_handlers(
        config,
        Arc::new(SystemClock),
        Arc::new(ChaChaEntropy::new()),
    )?;

    Ok(reading_routes(handlers)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}
