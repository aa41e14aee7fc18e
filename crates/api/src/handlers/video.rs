//! Handlers for video generation from an existing script.
//!
//! Routes:
//! - `POST /api/video/generate`         -- render every scene of a script
//! - `GET  /api/video/status/{job_id}`  -- job status (stub)

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use reels_core::generation::{AggregateResult, GenerationOptions};
use reels_core::script::ScriptDocument;
use reels_core::video_model::VideoModel;
use reels_providers::JobStatus;

use crate::error::{AppError, AppResult, INVALID_SCRIPT};
use crate::extract::AppJson;
use crate::handlers::parse_model;
use crate::response::SuccessResponse;
use crate::state::AppState;

pub const VIDEO_FAILED: &str = "Failed to generate video";

#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    /// Kept loose until the model is validated, so that a malformed script
    /// and a bad model get their own messages.
    pub script: Option<Value>,
    pub model: Option<String>,
    pub options: Option<GenerationOptions>,
}

#[derive(Debug, Serialize)]
pub struct VideoBody {
    pub result: AggregateResult,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: JobStatus,
}

/// POST /api/video/generate
///
/// Scenes are rendered one after another; the response arrives when the
/// last scene has finished.
pub async fn generate_video(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateVideoRequest>,
) -> AppResult<impl IntoResponse> {
    let script = match input.script {
        Some(script) if script.get("scenes").is_some_and(|s| !s.is_null()) => script,
        _ => return Err(AppError::BadRequest(INVALID_SCRIPT.to_string())),
    };
    let model = parse_model(input.model.as_deref())?;

    let document: ScriptDocument = serde_json::from_value(script).map_err(|e| {
        tracing::debug!(error = %e, "Rejected script document");
        AppError::BadRequest(INVALID_SCRIPT.to_string())
    })?;

    let options = input.options.unwrap_or_default();
    let result = state
        .dispatcher
        .generate_all_scenes(&document, model, &options)
        .await
        .map_err(AppError::operation(VIDEO_FAILED))?;

    Ok(SuccessResponse::ok(VideoBody { result }))
}

/// GET /api/video/status/{job_id}?model=
///
/// `model` is echoed back as given and defaults to `veo3`.
pub async fn check_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    let model = query
        .model
        .as_deref()
        .unwrap_or(VideoModel::default().as_str());

    SuccessResponse::ok(StatusBody {
        status: state.dispatcher.check_status(&job_id, model),
    })
}
