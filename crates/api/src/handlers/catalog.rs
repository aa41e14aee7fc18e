//! Read-only service metadata: index, health, supported platforms and models.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use reels_core::platform::Platform;
use reels_core::video_model::VideoModel;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PlatformsResponse {
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<VideoModel>,
}

/// GET / -- service descriptor listing the API endpoints.
pub async fn service_index() -> Json<Value> {
    Json(json!({
        "name": "Viral Reels Assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "AI-powered platform for creating viral video scripts and content",
        "endpoints": {
            "health": "/api/health",
            "platforms": "/api/platforms",
            "models": "/api/models",
            "analyze": "POST /api/analyze",
            "generateScript": "POST /api/script/generate",
            "generateVideo": "POST /api/video/generate",
            "create": "POST /api/create",
            "checkStatus": "GET /api/video/status/{jobId}",
        },
    }))
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// GET /api/platforms
pub async fn list_platforms() -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        platforms: Platform::ALL.to_vec(),
    })
}

/// GET /api/models
pub async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: VideoModel::ALL.to_vec(),
    })
}
