//! Integration tests for request bodies the JSON extractor refuses.
//!
//! Every refusal must come back as a `{ error, code }` JSON body without
//! serde's internal wording.

mod common;

use axum::http::{header, StatusCode};
use axum::response::Response;
use common::{body_json, post_json, post_raw};
use serde_json::{json, Value};

/// Assert a 400 JSON reply with a fixed message and return the body.
async fn assert_bad_body(response: Response, error: &str) -> Value {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["error"], error);
    assert_eq!(json["code"], "BAD_REQUEST");
    json
}

// ---------------------------------------------------------------------------
// Test: unparseable body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_json_error() {
    let response = post_raw(
        common::build_test_app(),
        "/api/analyze",
        Some("application/json"),
        "{not json",
    )
    .await;

    let json = assert_bad_body(response, "Request body is not valid JSON").await;
    assert!(json.get("message").is_none());
}

// ---------------------------------------------------------------------------
// Test: missing content type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_content_type_returns_json_error() {
    let response = post_raw(
        common::build_test_app(),
        "/api/script/generate",
        None,
        r#"{"idea":"x","platform":"tiktok"}"#,
    )
    .await;

    assert_bad_body(
        response,
        "Expected request with Content-Type: application/json",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Test: well-formed JSON with mistyped fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn numeric_idea_returns_json_error() {
    let response = post_json(
        common::build_test_app(),
        "/api/create",
        json!({ "idea": 42, "platform": "tiktok" }),
    )
    .await;

    let json = assert_bad_body(response, "Request body has invalid fields").await;
    assert!(!json["error"].as_str().unwrap().contains("invalid type"));
}

#[tokio::test]
async fn string_fps_returns_json_error() {
    let response = post_json(
        common::build_test_app(),
        "/api/video/generate",
        json!({
            "script": { "platform": "tiktok", "scenes": [] },
            "model": "wan2.1",
            "options": { "fps": "24" }
        }),
    )
    .await;

    assert_bad_body(response, "Request body has invalid fields").await;
}
