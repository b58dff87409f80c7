//! HTTP adapter for reading endpoints.
//!
//! - `GET /health` - Liveness and catalog size
//! - `POST /api/profile` - Numerology profile
//! - `POST /api/readings` - Generate a reading
//! - `GET /api/readings/:id` - Fetch a cached reading
//! - `GET /api/cards` - Catalog listing
//! - `POST /api/cards/analyze` - Card-only patterns for a combination

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeCardsRequest, CardListResponse, CardSelectionDto, CardSummary, ComputeProfileRequest,
    ErrorResponse, GenerateReadingRequest, HealthResponse, ProfileResponse, QuerentInfoDto,
    ReadingOptionsDto,
};
pub use handlers::ReadingHandlers;
pub use routes::reading_routes;
