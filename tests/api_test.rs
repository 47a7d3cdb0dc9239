//! Integration tests for the HTTP surface
//!
//! These drive the router directly, request in and response out, without
//! binding a socket.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use calc_api::api::create_router;
use calc_api::config::CorsSection;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn app() -> Router {
    create_router(&CorsSection::default())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Calculator API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn operations_lists_the_full_catalog() {
    let (status, body) = get("/operations").await;
    assert_eq!(status, StatusCode::OK);

    let operations = body["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 6);
    assert_eq!(operations[0]["symbol"], "+");
    assert_eq!(operations[0]["name"], "addition");
    assert_eq!(operations[5]["symbol"], "÷");
}

#[tokio::test]
async fn calculate_addition() {
    let (status, body) = post_calculate(json!({ "a": 2, "b": 3, "operation": "+" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 5.0);
    assert_eq!(body["expression"], "2.0 + 3.0");
    assert_eq!(body["source"], "calc-api");
}

#[tokio::test]
async fn calculate_subtraction() {
    let (status, body) = post_calculate(json!({ "a": 10, "b": 4, "operation": "-" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 6.0);
}

#[tokio::test]
async fn calculate_unicode_multiplication() {
    let (status, body) = post_calculate(json!({ "a": 6, "b": 7, "operation": "×" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 42.0);
    assert_eq!(body["expression"], "6.0 × 7.0");
}

#[tokio::test]
async fn division_by_zero_returns_bad_request() {
    for operation in ["/", "÷"] {
        let (status, body) =
            post_calculate(json!({ "a": 9, "b": 0, "operation": operation })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("zero"), "unexpected detail: {detail}");
    }
}

#[tokio::test]
async fn invalid_operation_returns_bad_request_listing_symbols() {
    let (status, body) = post_calculate(json!({ "a": 1, "b": 2, "operation": "%" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let detail = body["detail"].as_str().unwrap();
    for symbol in ["+", "-", "*", "×", "/", "÷"] {
        assert!(detail.contains(symbol), "detail missing {symbol}: {detail}");
    }
}

#[tokio::test]
async fn internal_errors_map_to_500_with_generic_detail() {
    use axum::response::IntoResponse;
    use calc_api::api::handlers::ApiError;
    use calc_api::Error;

    let response =
        ApiError::from(Error::Internal("formatter exploded".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], "Calculation error");
}

#[tokio::test]
async fn preflight_allows_configured_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/calculate")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn unconfigured_origin_gets_no_allow_origin_header() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/calculate")
                .header(header::ORIGIN, "http://evil.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
