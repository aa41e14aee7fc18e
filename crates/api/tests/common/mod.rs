#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use reels_api::config::{LogFormat, ServerConfig};
use reels_api::router::build_app_router;
use reels_api::state::AppState;
use reels_pipeline::prompts::{ANALYSIS_SYSTEM_PROMPT, STORY_SYSTEM_PROMPT};
use reels_pipeline::{GenerationError, JsonObject, OpenAiConfig, TextGenerator};
use reels_providers::{ProviderConfig, ProviderDispatcher};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        app_env: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from("tests/static-does-not-exist"),
        log_format: LogFormat::Pretty,
        openai: OpenAiConfig::default(),
        providers: ProviderConfig::default(),
    }
}

// ---------------------------------------------------------------------------
// Fake text generator
// ---------------------------------------------------------------------------

/// Answers each pipeline stage with a canned reply, chosen by system prompt.
/// Three scenes are returned; the second has no duration.
pub struct FakeGenerator {
    fail: bool,
    calls: Mutex<usize>,
}

impl FakeGenerator {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: Mutex::new(0),
        })
    }

    /// Every call fails with a 503 from the upstream service.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(
        &self,
        system_prompt: &str,
        _user_prompt: &str,
        _temperature: f64,
    ) -> Result<JsonObject, GenerationError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(GenerationError::Api {
                status: 503,
                body: "upstream overloaded".to_string(),
            });
        }

        let reply = if system_prompt == ANALYSIS_SYSTEM_PROMPT {
            json!({
                "viralPotential": 8,
                "targetAudience": "busy parents",
                "suggestions": ["open with the result"],
                "trendingTopics": ["meal prep"]
            })
        } else if system_prompt == STORY_SYSTEM_PROMPT {
            json!({
                "title": "Ten Minute Dinners",
                "hook": "You are cooking wrong",
                "story": "A parent rescues weeknight dinner.",
                "cta": "Follow for more",
                "keyMessages": ["fast", "cheap"]
            })
        } else {
            json!({
                "scenes": [
                    { "description": "chaos", "duration": 5, "visualPrompt": "messy kitchen", "audioPrompt": "tense strings" },
                    { "description": "prep", "visualPrompt": "chopping vegetables", "audioPrompt": "upbeat" },
                    { "description": "plate", "duration": 8, "visualPrompt": "family at table", "audioPrompt": "warm piano", "textOverlay": "Done!" }
                ]
            })
        };
        Ok(reply.as_object().cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers, a working
/// fake generator and default (unconfigured) providers.
pub fn build_test_app() -> Router {
    build_test_app_with(FakeGenerator::working(), ProviderConfig::default())
}

/// Build the full application router around the given generator and
/// provider configuration.
pub fn build_test_app_with(generator: Arc<dyn TextGenerator>, providers: ProviderConfig) -> Router {
    let config = ServerConfig {
        providers: providers.clone(),
        ..test_config()
    };
    let state = AppState::from_parts(config.clone(), generator, ProviderDispatcher::new(providers));
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Mock video provider
// ---------------------------------------------------------------------------

/// Local renderer mock answering `POST {base}/generate`. Prompts containing
/// "vegetables" fail with 500.
pub async fn start_mock_renderer() -> String {
    async fn generate(Json(body): Json<Value>) -> Response {
        use axum::response::IntoResponse;

        let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
        if prompt.contains("vegetables") {
            return (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "out of VRAM").into_response();
        }
        Json(json!({
            "output_path": format!("/renders/{}.mp4", prompt.replace(' ', "-")),
            "job_id": "local-1"
        }))
        .into_response()
    }

    let app = Router::new().route("/generate", post(generate));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body, with `content_type` set only when given.
pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    app.oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
