//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pangsent_core::{AnalysisRequest, AnalysisResult, Sentiment};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Analysis request envelope
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    /// Missing or null text is analyzed as empty feedback
    #[serde(default)]
    text: Option<String>,
}

/// Analysis response, field names fixed by existing clients
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    #[serde(rename = "Feedback")]
    pub feedback: String,

    #[serde(rename = "Sentiment Result")]
    pub sentiment: Sentiment,

    pub translated_text: String,

    pub contains_pangasinan: bool,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            feedback: result.original_text,
            sentiment: result.sentiment,
            translated_text: result.translated_text,
            contains_pangasinan: result.contains_local_language,
        }
    }
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    metrics::counter!("pangsent_requests_total").increment(1);

    let Json(req) = payload?;
    let request = AnalysisRequest::new(req.text.unwrap_or_default());
    debug!("Analyzing {} bytes of feedback", request.text.len());

    let start = Instant::now();
    let result = state.resolver.analyze(&request).await;
    let latency_us = start.elapsed().as_micros() as f64;

    metrics::counter!(
        "pangsent_decisions_total",
        "source" => result.provenance.as_str(),
        "sentiment" => result.sentiment.as_str()
    )
    .increment(1);
    metrics::histogram!("pangsent_resolve_latency_us").record(latency_us);

    info!(
        sentiment = %result.sentiment,
        provenance = result.provenance.as_str(),
        contains_pangasinan = result.contains_local_language,
        "Feedback analyzed"
    );

    Ok(Json(result.into()))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Pangasinan Sentiment API is running",
    }))
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

async fn fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found" })),
    )
        .into_response()
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::InvalidRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        };

        warn!("Request failed ({}): {}", kind, self);
        metrics::counter!("pangsent_errors_total", "type" => kind).increment(1);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
