//! HTTP routes for reading endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_cards, compute_profile, generate_reading, get_reading, health, list_cards,
    ReadingHandlers,
};

/// Creates the reading router with all endpoints.
pub fn reading_routes(handlers: ReadingHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/profile", post(compute_profile))
        .route("/api/readings", post(generate_reading))
        .route("/api/readings/:id", get(get_reading))
        .route("/api/cards", get(list_cards))
        .route("/api/cards/analyze", post(analyze_cards))
        .with_state(handlers)
}
