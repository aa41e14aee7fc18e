//! End-to-end handler: idea → script → scene videos in a single request.

use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use reels_core::generation::{AggregateResult, GenerationOptions};
use reels_core::script::ScriptDocument;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::parse_model;
use crate::handlers::script::IdeaRequest;
use crate::response::SuccessResponse;
use crate::state::AppState;

pub const CREATE_FAILED: &str = "Failed to create viral reel";

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    #[serde(flatten)]
    pub idea: IdeaRequest,
    pub model: Option<String>,
    pub options: Option<GenerationOptions>,
}

#[derive(Debug, Serialize)]
pub struct CreateBody {
    pub script: ScriptDocument,
    pub videos: AggregateResult,
}

/// POST /api/create
///
/// All input is validated before the first upstream call. A failure in
/// either phase fails the request; no partial script is returned.
pub async fn create_reel(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    let (idea, platform) = input.idea.validate()?;
    let model = parse_model(input.model.as_deref())?;
    let options = input.options.unwrap_or_default();

    tracing::info!(%platform, %model, "Creating reel");

    let script = state
        .pipeline
        .generate_complete_script(idea, platform)
        .await
        .map_err(AppError::operation(CREATE_FAILED))?;

    let videos = state
        .dispatcher
        .generate_all_scenes(&script, model, &options)
        .await
        .map_err(AppError::operation(CREATE_FAILED))?;

    Ok(SuccessResponse::ok(CreateBody { script, videos }))
}
