//! Integration tests for the HTTP API.
//!
//! Builds the router through the same wiring as the server, with a fixed
//! clock and seeded entropy, and drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use arcana::adapters::http::reading_routes;
use arcana::adapters::{ChaChaEntropy, FixedClock};
use arcana::config::AppConfig;
use arcana::domain::foundation::Timestamp;
use arcana::startup::build_handlers;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let today = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let handlers = build_handlers(
        &AppConfig::default(),
        Arc::new(FixedClock::new(Timestamp::start_of(today))),
        Arc::new(ChaChaEntropy::with_default_seed(42)),
    )
    .unwrap();
    reading_routes(handlers)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_reports_catalog_size() {
    let (status, body) = send(app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cards"], 26);
}

#[tokio::test]
async fn profile_endpoint_computes_numbers() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/profile",
        Some(json!({"full_name": "John Smith", "birth_date": "1990-01-15"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["life_path"], 8);
    assert_eq!(body["sun_sign"], "capricorn");
    assert_eq!(body["personal_year"], 8);
}

#[tokio::test]
async fn profile_endpoint_rejects_bad_date() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/profile",
        Some(json!({"full_name": "John Smith", "birth_date": "1990-13-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn reading_round_trip() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/readings",
        Some(json!({
            "querent_info": {
                "full_name": "Mara Quill",
                "birth_date": "1984-06-02",
                "question": "Where should I put my energy?"
            },
            "card_selection": {"method": "guided", "number_of_cards": 4},
            "reading_options": {"include_reversals": true}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["reading"]["drawn"].as_array().unwrap().len(), 4);
    assert!(body["reading"]["interpretation"]["summary"].is_string());

    let id = body["reading"]["metadata"]["id"].as_str().unwrap().to_string();
    let (status, fetched) = send(app, Method::GET, &format!("/api/readings/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["metadata"]["id"], id.as_str());
}

#[tokio::test]
async fn reading_with_future_birth_date_is_422() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/readings",
        Some(json!({"querent_info": {"full_name": "John Smith", "birth_date": "2030-01-01"}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["details"]["field"], "birth_date");
}

#[tokio::test]
async fn reading_with_unknown_method_is_422() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/readings",
        Some(json!({
            "querent_info": {"full_name": "John Smith", "birth_date": "1990-01-15"},
            "card_selection": {"method": "telepathic"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"]["field"], "method");
}

#[tokio::test]
async fn unknown_reading_is_404() {
    let (status, _) = send(
        app(),
        Method::GET,
        "/api/readings/6f1c2a9e-3b1d-4e7a-9c55-0d2b8f4e6a10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app(), Method::GET, "/api/readings/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "READING_NOT_FOUND");
}

#[tokio::test]
async fn cards_listing_and_analysis() {
    let app = app();
    let (status, body) = send(app.clone(), Method::GET, "/api/cards", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 26);
    assert_eq!(body["cards"][0]["id"], "major-0");

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/cards/analyze",
        Some(json!({"card_ids": ["major-0", "major-1"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cards"].as_array().unwrap().len(), 2);
    assert_eq!(body["patterns"]["numeric"]["master_numbers"], json!([11, 22]));
    assert!(body["quick_analysis"].as_str().unwrap().contains("11"));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/cards/analyze",
        Some(json!({"card_ids": ["major-0", "major-5"]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "CARD_NOT_FOUND");
}

#[tokio::test]
async fn reading_with_missing_name_returns_envelope() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/readings",
        Some(json!({"querent_info": {"birth_date": "1990-01-15"}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "EMPTY_FIELD");
    assert_eq!(body["error"]["details"]["field"], "full_name");
}

#[tokio::test]
async fn reading_with_mistyped_field_returns_envelope() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/readings",
        Some(json!({
            "querent_info": {"full_name": "John Smith", "birth_date": "1990-01-15"},
            "card_selection": {"method": "random", "number_of_cards": -3}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["details"]["field"], "body");
}

#[tokio::test]
async fn reading_with_out_of_range_count_is_invalid_selection() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/readings",
        Some(json!({
            "querent_info": {"full_name": "John Smith", "birth_date": "1990-01-15"},
            "card_selection": {"method": "specific", "card_ids": ["cups-2"], "number_of_cards": 99}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_SELECTION");
    assert_eq!(body["error"]["details"]["field"], "number_of_cards");
}

#[tokio::test]
async fn profile_with_malformed_body_is_structured_422() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/profile")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, body) = send(app(), Method::POST, "/api/profile", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "EMPTY_FIELD");
}
