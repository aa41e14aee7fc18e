//! Integration tests for `OpenAiClient` against an in-process mock of the
//! chat-completions endpoint.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use reels_pipeline::{GenerationError, OpenAiClient, OpenAiConfig, TextGenerator};

/// Request captured by the mock: authorization header and JSON body.
type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn client(base_url: String) -> OpenAiClient {
    OpenAiClient::new(OpenAiConfig {
        api_key: Some("sk-test".to_string()),
        base_url,
        model: "gpt-4".to_string(),
    })
}

/// Mock that records the request and replies with `content` as the first
/// choice's message.
fn completion_app(content: &'static str, captured: Captured) -> Router {
    Router::new()
        .route(
            "/v1/chat/completions",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *captured.lock().unwrap() = Some((auth, body));
                    Json(json!({
                        "choices": [{ "message": { "role": "assistant", "content": content } }]
                    }))
                },
            ),
        )
        .with_state(captured)
}

// ---------------------------------------------------------------------------
// Test: request carries model, messages, temperature and JSON response format
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sends_chat_completion_request() {
    let captured: Captured = Arc::default();
    let base = spawn(completion_app(r#"{"ok": true}"#, captured.clone())).await;

    let reply = client(base)
        .complete("be helpful", "analyze this", 0.7)
        .await
        .unwrap();
    assert_eq!(reply["ok"], true);

    let (auth, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "be helpful");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "analyze this");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["response_format"]["type"], "json_object");
}

// ---------------------------------------------------------------------------
// Test: non-object content is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_object_content_is_rejected() {
    let base = spawn(completion_app(r#"["a", "b"]"#, Arc::default())).await;

    let result = client(base).complete("s", "u", 0.7).await;
    assert_matches!(result, Err(GenerationError::NotAnObject));
}

// ---------------------------------------------------------------------------
// Test: non-2xx status surfaces as an API error with status and body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_is_reported() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = spawn(app).await;

    let result = client(base).complete("s", "u", 0.8).await;
    assert_matches!(
        result,
        Err(GenerationError::Api { status: 429, body }) if body == "slow down"
    );
}

// ---------------------------------------------------------------------------
// Test: a completion without choices is an empty completion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_choices_is_empty_completion() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = spawn(app).await;

    let result = client(base).complete("s", "u", 0.7).await;
    assert_matches!(result, Err(GenerationError::EmptyCompletion));
}
