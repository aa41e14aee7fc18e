use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, create, script, video};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      GET   service health
/// /platforms                   GET   supported platform identifiers
/// /models                      GET   supported model identifiers
///
/// /analyze                     POST  analyze an idea
/// /script/generate             POST  idea → script
/// /video/generate              POST  script → scene videos
/// /video/status/{job_id}       GET   job status (stub)
///
/// /create                      POST  idea → script → scene videos
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(catalog::health_check))
        .route("/platforms", get(catalog::list_platforms))
        .route("/models", get(catalog::list_models))
        .route("/analyze", post(script::analyze_idea))
        .route("/script/generate", post(script::generate_script))
        .route("/video/generate", post(video::generate_video))
        .route("/video/status/{job_id}", get(video::check_status))
        .route("/create", post(create::create_reel))
}

/// Mount the root-level service descriptor (not under `/api`).
pub fn index_router() -> Router<AppState> {
    Router::new().route("/", get(catalog::service_index))
}
