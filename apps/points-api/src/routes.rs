//! # HTTP Routes
//!
//! | Method | Path                   | Handler                   |
//! |--------|------------------------|---------------------------|
//! | POST   | `/receipts/process`    | [`process_receipt_route`] |
//! | GET    | `/receipts/:id/points` | [`get_points_route`]      |
//! | GET    | `/health`              | [`health_route`]          |

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use points_core::CoreError;

use crate::commands;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(process_receipt_route))
        .route("/receipts/:id/points", get(get_points_route))
        .route("/health", get(health_route))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /receipts/process
///
/// The body is taken as raw bytes so that a missing or odd `Content-Type`
/// header does not change how the receipt is judged.
pub async fn process_receipt_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let response = commands::process_receipt(&state.store, &body)?;
    encode(&response)
}

/// GET /receipts/:id/points
pub async fn get_points_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let response = commands::get_points(&state.store, &id)?;
    encode(&response)
}

/// GET /health
pub async fn health_route(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

/// Serializes a success body, reporting failures as `EncodingFailure`.
fn encode<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| CoreError::EncodingFailure(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
