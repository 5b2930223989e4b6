//! HTTP contract tests against the router, without binding a socket

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use pangsent_resolver::Resolver;
use pangsent_server::{create_router, AppState, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    app_with_config(ServerConfig::default())
}

fn app_with_config(config: ServerConfig) -> Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let resolver = Resolver::builder().build().unwrap();
    create_router(AppState::with_resolver(config, resolver, handle))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_analyze_local_expression() {
    let (status, body) = post_json(app(), r#"{"text": "mabayag so pila"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Feedback": "mabayag so pila",
            "Sentiment Result": "negative",
            "translated_text": "mabayag so pila",
            "contains_pangasinan": true,
        })
    );
}

#[tokio::test]
async fn test_analyze_english_feedback() {
    let (status, body) = post_json(
        app(),
        r#"{"text": "The service was excellent and the staff were wonderful"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Sentiment Result"], "positive");
    assert_eq!(body["contains_pangasinan"], false);
}

#[tokio::test]
async fn test_missing_text_is_empty_feedback() {
    let (status, body) = post_json(app(), "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Feedback"], "");
    assert_eq!(body["Sentiment Result"], "neutral");
    assert_eq!(body["contains_pangasinan"], false);
}

#[tokio::test]
async fn test_malformed_envelope_is_400() {
    for body in ["{not json", r#"{"text": 42}"#, "[1, 2]"] {
        let (status, payload) = post_json(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(payload["error"].is_string(), "{body}");
    }
}

#[tokio::test]
async fn test_oversized_body_is_413_json() {
    let config = ServerConfig {
        max_body_bytes: 64,
        ..ServerConfig::default()
    };
    let body = format!(r#"{{"text": "{}"}}"#, "maliket ".repeat(32));

    let (status, payload) = post_json(app_with_config(config), &body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "message": "Pangasinan Sentiment API is running"})
    );
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/analyse")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
