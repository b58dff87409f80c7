//! HTTP handlers for reading endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::reading::{
    AnalyzeCombinationHandler, ComputeProfileHandler, GenerateReadingHandler, GetReadingHandler,
    GetReadingQuery, ReadingOutcome,
};
use crate::domain::foundation::{DomainError, ErrorCode, ReadingId};
use crate::ports::CardCatalog;

use super::dto::{
    AnalyzeCardsRequest, CardListResponse, CardSummary, ComputeProfileRequest, ErrorResponse,
    GenerateReadingRequest, HealthResponse, ProfileResponse,
};

const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReadingHandlers {
    generate_handler: Arc<GenerateReadingHandler>,
    profile_handler: Arc<ComputeProfileHandler>,
    analyze_handler: Arc<AnalyzeCombinationHandler>,
    get_handler: Arc<GetReadingHandler>,
    catalog: Arc<dyn CardCatalog>,
    verbose_errors: bool,
}

impl ReadingHandlers {
    pub fn new(
        generate_handler: Arc<GenerateReadingHandler>,
        profile_handler: Arc<ComputeProfileHandler>,
        analyze_handler: Arc<AnalyzeCombinationHandler>,
        get_handler: Arc<GetReadingHandler>,
        catalog: Arc<dyn CardCatalog>,
    ) -> Self {
        Self {
            generate_handler,
            profile_handler,
            analyze_handler,
            get_handler,
            catalog,
            verbose_errors: false,
        }
    }

    /// Exposes internal error messages in responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(handlers): State<ReadingHandlers>) -> Response {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cards: handlers.catalog.len(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/profile - Compute a numerology profile
pub async fn compute_profile(
    State(handlers): State<ReadingHandlers>,
    payload: Result<Json<ComputeProfileRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return handle_reading_error(body_rejected(rejection), handlers.verbose_errors)
        }
    };
    match handlers.profile_handler.handle(req.into()) {
        Ok(result) => (StatusCode::OK, Json(ProfileResponse::from(result))).into_response(),
        Err(e) => handle_reading_error(e, handlers.verbose_errors),
    }
}

/// POST /api/readings - Generate a reading
///
/// The body is always a reading outcome; the status tells success (200)
/// from rejected input (422) and internal failure (500).
pub async fn generate_reading(
    State(handlers): State<ReadingHandlers>,
    payload: Result<Json<GenerateReadingRequest>, JsonRejection>,
) -> Response {
    let command = match payload {
        Ok(Json(req)) => req.into_command().map_err(DomainError::from),
        Err(rejection) => Err(body_rejected(rejection)),
    };
    let mut outcome = match command {
        Ok(cmd) => handlers.generate_handler.handle(cmd).await,
        Err(e) => ReadingOutcome::failure(e, Vec::new()),
    };

    let status = match &outcome.error {
        None => StatusCode::OK,
        Some(e) => status_for(e.code),
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR && !handlers.verbose_errors {
        if let Some(e) = outcome.error.as_mut() {
            e.message = GENERIC_INTERNAL_MESSAGE.to_string();
            e.details.clear();
        }
    }
    (status, Json(outcome)).into_response()
}

/// GET /api/readings/:id - Fetch a cached reading
pub async fn get_reading(
    State(handlers): State<ReadingHandlers>,
    Path(id): Path<String>,
) -> Response {
    let reading_id: ReadingId = match id.parse() {
        Ok(reading_id) => reading_id,
        Err(_) => {
            let e = DomainError::new(ErrorCode::ReadingNotFound, format!("Reading {} not found", id))
                .with_detail("reading_id", id);
            return handle_reading_error(e, handlers.verbose_errors);
        }
    };

    match handlers.get_handler.handle(GetReadingQuery { reading_id }).await {
        Ok(reading) => (StatusCode::OK, Json(reading)).into_response(),
        Err(e) => handle_reading_error(e, handlers.verbose_errors),
    }
}

/// POST /api/cards/analyze - Card-only patterns for a combination
pub async fn analyze_cards(
    State(handlers): State<ReadingHandlers>,
    payload: Result<Json<AnalyzeCardsRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return handle_reading_error(body_rejected(rejection), handlers.verbose_errors)
        }
    };
    match handlers.analyze_handler.handle(req.into()) {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => handle_reading_error(e, handlers.verbose_errors),
    }
}

/// GET /api/cards - Catalog listing
pub async fn list_cards(State(handlers): State<ReadingHandlers>) -> Response {
    let cards: Vec<CardSummary> = handlers.catalog.all().iter().map(CardSummary::from).collect();
    let response = CardListResponse {
        total: cards.len(),
        cards,
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        c if c.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ReadingNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A body that is not JSON, or whose fields have the wrong types.
fn body_rejected(rejection: JsonRejection) -> DomainError {
    DomainError::validation("body", rejection.body_text())
}

fn handle_reading_error(error: DomainError, verbose: bool) -> Response {
    let status = status_for(error.code);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(code = %error.code, message = %error.message, "Request failed");
        if !verbose {
            return (status, Json(ErrorResponse::internal(GENERIC_INTERNAL_MESSAGE))).into_response();
        }
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}
