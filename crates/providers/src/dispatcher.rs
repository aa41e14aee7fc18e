//! Routes scenes to the adapter for the selected model.

use serde::Serialize;

use reels_core::generation::{AggregateResult, GenerationOptions, GenerationResult};
use reels_core::script::{Scene, ScriptDocument};
use reels_core::video_model::VideoModel;

use crate::adapter::VideoProvider;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::grok::GrokAdapter;
use crate::veo3::Veo3Adapter;
use crate::wan::WanAdapter;

/// Status reported for a generation job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub job_id: String,
    pub model: String,
    pub status: String,
    pub message: String,
}

/// One adapter per [`VideoModel`], all sharing a single HTTP connection
/// pool. Holds only read-only configuration.
pub struct ProviderDispatcher {
    veo3: Veo3Adapter,
    grok: GrokAdapter,
    wan2_1: WanAdapter,
    wan2_2: WanAdapter,
}

impl ProviderDispatcher {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build the dispatcher on an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self {
            veo3: Veo3Adapter::new(client.clone(), config.veo3_api_key, config.veo3_base_url),
            grok: GrokAdapter::new(client.clone(), config.grok_api_key, config.grok_base_url),
            wan2_1: WanAdapter::new(client.clone(), VideoModel::Wan21, config.wan2_1_endpoint),
            wan2_2: WanAdapter::new(client, VideoModel::Wan22, config.wan2_2_endpoint),
        }
    }

    /// The adapter serving `model`.
    pub fn adapter(&self, model: VideoModel) -> &dyn VideoProvider {
        match model {
            VideoModel::Veo3 => &self.veo3,
            VideoModel::Grok => &self.grok,
            VideoModel::Wan21 => &self.wan2_1,
            VideoModel::Wan22 => &self.wan2_2,
        }
    }

    /// Generate a single scene with `model`.
    ///
    /// Fails only on a provider precondition (missing credential); call
    /// failures are returned as a result with `status: error`.
    pub async fn generate_video(
        &self,
        scene: &Scene,
        model: VideoModel,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, ProviderError> {
        self.adapter(model).generate(scene, options).await
    }

    /// Generate every scene of `document`, one at a time and in order.
    ///
    /// The document's aspect ratio overrides `options.aspect_ratio`. A failed
    /// scene is recorded and the batch moves on; a precondition failure
    /// aborts the whole batch.
    pub async fn generate_all_scenes(
        &self,
        document: &ScriptDocument,
        model: VideoModel,
        options: &GenerationOptions,
    ) -> Result<AggregateResult, ProviderError> {
        let options = GenerationOptions {
            aspect_ratio: Some(document.aspect_ratio().to_string()),
            ..options.clone()
        };

        tracing::info!(
            script_id = %document.id,
            %model,
            scenes = document.scenes().len(),
            "Generating scene videos"
        );

        let mut results = Vec::with_capacity(document.scenes().len());
        for scene in document.scenes() {
            results.push(self.generate_video(scene, model, &options).await?);
        }

        let aggregate =
            AggregateResult::new(document.id.clone(), document.platform, model, results);
        tracing::info!(
            script_id = %aggregate.script_id,
            %model,
            total = aggregate.total_scenes,
            successful = aggregate.successful_scenes,
            "Scene videos generated"
        );
        Ok(aggregate)
    }

    /// Report the status of a previously submitted job.
    ///
    /// Providers are not polled yet; every job reports `processing`.
    pub fn check_status(&self, job_id: &str, model: &str) -> JobStatus {
        JobStatus {
            job_id: job_id.to_string(),
            model: model.to_string(),
            status: "processing".to_string(),
            message: "Status checking not yet implemented".to_string(),
        }
    }
}
