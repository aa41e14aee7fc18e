//! The common adapter contract and the HTTP helpers adapters share.

use async_trait::async_trait;
use serde_json::Value;

use reels_core::generation::{GenerationOptions, GenerationResult};
use reels_core::script::Scene;
use reels_core::video_model::VideoModel;

use crate::error::ProviderError;

/// Default frame aspect ratio sent when the caller gives none.
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

/// What a provider reports for an accepted generation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub video_url: Option<String>,
    pub job_id: Option<String>,
}

/// A video generation back end.
///
/// Implementors provide [`check_ready`](Self::check_ready) and
/// [`submit`](Self::submit); the provided [`generate`](Self::generate)
/// turns call failures into failed [`GenerationResult`]s so one bad scene
/// does not abort its siblings.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    fn model(&self) -> VideoModel;

    /// Verify the provider is configured well enough to be called.
    fn check_ready(&self) -> Result<(), ProviderError>;

    /// Issue exactly one generation request for `scene`.
    async fn submit(
        &self,
        scene: &Scene,
        options: &GenerationOptions,
    ) -> Result<Submission, ProviderError>;

    /// Generate one scene.
    ///
    /// Returns `Err` only on a precondition failure, whether reported by
    /// [`check_ready`](Self::check_ready) or by `submit`; transport and
    /// non-2xx failures come back as a result with `status: error`.
    async fn generate(
        &self,
        scene: &Scene,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, ProviderError> {
        self.check_ready()?;

        let model = self.model();
        match self.submit(scene, options).await {
            Ok(submission) => {
                tracing::info!(
                    %model,
                    scene_number = scene.scene_number,
                    job_id = submission.job_id.as_deref().unwrap_or_default(),
                    "Scene generation submitted"
                );
                Ok(GenerationResult::success(
                    model,
                    scene.clone(),
                    submission.video_url,
                    submission.job_id,
                ))
            }
            Err(e) if e.is_precondition() => Err(e),
            Err(e) => {
                tracing::warn!(
                    %model,
                    scene_number = scene.scene_number,
                    error = %e,
                    "Scene generation failed"
                );
                Ok(GenerationResult::failure(model, scene.clone(), e.to_string()))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a prepared request and parse a successful JSON reply.
///
/// Non-2xx replies become [`ProviderError::Api`] carrying the status and
/// body text.
pub(crate) async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<Value>().await?)
}

/// Read the first present field among `keys` as a string. Numeric job
/// identifiers are rendered to text.
pub(crate) fn string_field(reply: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match reply.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
