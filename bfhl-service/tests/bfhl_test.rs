//! In-process tests for the `/bfhl` dispatch endpoint.
//!
//! The router is driven directly with `tower::ServiceExt::oneshot` and a
//! mock text provider, so no network or API key is involved.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use bfhl_service::config::{BfhlConfig, GeminiSettings, ServiceSettings};
use bfhl_service::services::providers::mock::MockTextProvider;
use bfhl_service::services::providers::TextProvider;
use bfhl_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

const TEST_EMAIL: &str = "ops@example.com";

fn test_state(text_provider: Arc<dyn TextProvider>) -> AppState {
    AppState {
        config: BfhlConfig {
            common: service_core::config::Config { port: 0 },
            service: ServiceSettings {
                official_email: TEST_EMAIL.to_string(),
            },
            gemini: GeminiSettings {
                api_key: "test-api-key".to_string(),
                model: "gemini-1.5-flash".to_string(),
            },
        },
        text_provider,
    }
}

fn mock_state(enabled: bool) -> AppState {
    test_state(Arc::new(MockTextProvider::new(enabled)))
}

async fn post_bfhl(state: AppState, body: Value) -> (StatusCode, Value) {
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).expect("body must be JSON");
    (status, json)
}

#[tokio::test]
async fn fibonacci_returns_sequence() {
    let (status, body) = post_bfhl(mock_state(true), json!({"fibonacci": 5})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["official_email"], TEST_EMAIL);
    assert_eq!(body["data"], json!([0, 1, 1, 2, 3]));
}

#[tokio::test]
async fn fibonacci_of_one_is_single_zero() {
    let (status, body) = post_bfhl(mock_state(true), json!({"fibonacci": 1})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([0]));
}

#[tokio::test]
async fn fibonacci_rejects_non_positive_values() {
    for value in [json!(0), json!(-3), json!("5"), json!(2.5)] {
        let (status, body) = post_bfhl(mock_state(true), json!({ "fibonacci": value })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["is_success"], false);
        assert_eq!(body["error"], "Fibonacci value must be a positive integer");
    }
}

#[tokio::test]
async fn fibonacci_overflow_is_internal_error() {
    let (status, body) = post_bfhl(mock_state(true), json!({"fibonacci": 95})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn prime_filters_in_order() {
    let (status, body) = post_bfhl(mock_state(true), json!({"prime": [2, 3, 4, 9, 11]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([2, 3, 11]));
}

#[tokio::test]
async fn prime_silently_drops_non_integers() {
    let (status, body) = post_bfhl(
        mock_state(true),
        json!({"prime": [2, "seven", 7.5, null, 13, [5]]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([2, 13]));
}

#[tokio::test]
async fn prime_rejects_non_array() {
    let (status, body) = post_bfhl(mock_state(true), json!({"prime": 7})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prime input must be an array");
}

#[tokio::test]
async fn lcm_reduces_array() {
    let (status, body) = post_bfhl(mock_state(true), json!({"lcm": [4, 6]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(12));
}

#[tokio::test]
async fn lcm_of_single_element_is_identity() {
    let (status, body) = post_bfhl(mock_state(true), json!({"lcm": [7]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(7));
}

#[tokio::test]
async fn lcm_rejects_empty_array() {
    let (status, body) = post_bfhl(mock_state(true), json!({"lcm": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "LCM input must be a non-empty array");
}

#[tokio::test]
async fn hcf_reduces_array() {
    let (status, body) = post_bfhl(mock_state(true), json!({"hcf": [12, 18]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(6));
}

#[tokio::test]
async fn hcf_rejects_non_array() {
    let (status, body) = post_bfhl(mock_state(true), json!({"hcf": "12,18"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "HCF input must be a non-empty array");
}

#[tokio::test]
async fn two_keys_are_unprocessable() {
    let (status, body) = post_bfhl(mock_state(true), json!({"a": 1, "b": 2})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Exactly one key is required");
}

#[tokio::test]
async fn unknown_key_is_rejected() {
    let (status, body) = post_bfhl(mock_state(true), json!({"unknownKey": 1})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid key");
}

#[tokio::test]
async fn ai_returns_first_token_of_reply() {
    // The mock replies "Mock response for: <prompt>".
    let (status, body) = post_bfhl(mock_state(true), json!({"AI": "capital of France?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["data"], json!("Mock"));
}

#[tokio::test]
async fn ai_rejects_non_string_prompt() {
    let (status, body) = post_bfhl(mock_state(true), json!({"AI": 42})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "AI input must be a string");
}

#[tokio::test]
async fn ai_provider_failure_is_masked() {
    // Disabled mock fails every call; the client must only see the generic
    // message, never provider details.
    let (status, body) = post_bfhl(mock_state(false), json!({"AI": "hello"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "AI service failed");
}

#[tokio::test]
async fn error_envelope_has_no_email_field() {
    let (_, body) = post_bfhl(mock_state(true), json!({"unknownKey": 1})).await;

    assert!(body.get("official_email").is_none());
}
