//! Handlers for idea analysis and script generation.
//!
//! Routes:
//! - `POST /api/analyze`          -- stage 1 only
//! - `POST /api/script/generate`  -- full three-stage pipeline

use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use reels_core::platform::Platform;
use reels_core::script::ScriptDocument;
use reels_pipeline::JsonObject;

use crate::error::{AppError, AppResult, MISSING_IDEA_OR_PLATFORM};
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

pub const ANALYZE_FAILED: &str = "Failed to analyze idea";
pub const SCRIPT_FAILED: &str = "Failed to generate script";

/// Request body shared by every endpoint that starts from an idea.
#[derive(Debug, Default, Deserialize)]
pub struct IdeaRequest {
    pub idea: Option<String>,
    pub platform: Option<String>,
}

impl IdeaRequest {
    /// Return the idea text and the parsed platform.
    ///
    /// Absent and empty fields are both treated as missing.
    pub fn validate(&self) -> AppResult<(&str, Platform)> {
        let idea = self.idea.as_deref().filter(|s| !s.is_empty());
        let platform = self.platform.as_deref().filter(|s| !s.is_empty());
        match (idea, platform) {
            (Some(idea), Some(platform)) => Ok((idea, platform.parse::<Platform>()?)),
            _ => Err(AppError::BadRequest(MISSING_IDEA_OR_PLATFORM.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisBody {
    pub analysis: JsonObject,
}

#[derive(Debug, Serialize)]
pub struct ScriptBody {
    pub script: ScriptDocument,
}

/// POST /api/analyze
pub async fn analyze_idea(
    State(state): State<AppState>,
    AppJson(input): AppJson<IdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let (idea, platform) = input.validate()?;

    let analysis = state
        .pipeline
        .analyze_idea(idea, platform)
        .await
        .map_err(AppError::operation(ANALYZE_FAILED))?;

    Ok(SuccessResponse::ok(AnalysisBody { analysis }))
}

/// POST /api/script/generate
pub async fn generate_script(
    State(state): State<AppState>,
    AppJson(input): AppJson<IdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let (idea, platform) = input.validate()?;
    tracing::info!(%platform, "Generating script");

    let script = state
        .pipeline
        .generate_complete_script(idea, platform)
        .await
        .map_err(AppError::operation(SCRIPT_FAILED))?;

    Ok(SuccessResponse::ok(ScriptBody { script }))
}
