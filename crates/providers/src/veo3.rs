//! Adapter for the hosted Veo 3 API.

use async_trait::async_trait;
use serde_json::json;

use reels_core::generation::GenerationOptions;
use reels_core::script::{seconds_number, Scene};
use reels_core::video_model::VideoModel;

use crate::adapter::{endpoint, send_json, string_field, Submission, VideoProvider, DEFAULT_ASPECT_RATIO};
use crate::error::ProviderError;

/// Render quality requested when the caller gives none.
pub const DEFAULT_QUALITY: &str = "high";

pub struct Veo3Adapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl Veo3Adapter {
    pub fn new(client: reqwest::Client, api_key: Option<String>, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential {
                model: VideoModel::Veo3,
            })
    }
}

#[async_trait]
impl VideoProvider for Veo3Adapter {
    fn model(&self) -> VideoModel {
        VideoModel::Veo3
    }

    fn check_ready(&self) -> Result<(), ProviderError> {
        self.api_key().map(|_| ())
    }

    async fn submit(
        &self,
        scene: &Scene,
        options: &GenerationOptions,
    ) -> Result<Submission, ProviderError> {
        let api_key = self.api_key()?;
        let body = json!({
            "prompt": scene.visual_prompt,
            "duration": seconds_number(scene.duration_secs),
            "audio_prompt": scene.audio_prompt,
            "aspect_ratio": options.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO),
            "quality": options.quality.as_deref().unwrap_or(DEFAULT_QUALITY),
        });

        let request = self
            .client
            .post(endpoint(&self.base_url, "/v1/generate"))
            .bearer_auth(api_key)
            .json(&body);
        let reply = send_json(request).await?;

        Ok(Submission {
            video_url: string_field(&reply, &["video_url"]),
            job_id: string_field(&reply, &["job_id"]),
        })
    }
}
