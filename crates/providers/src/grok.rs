//! Adapter for the hosted Grok video API.

use async_trait::async_trait;
use serde_json::json;

use reels_core::generation::GenerationOptions;
use reels_core::script::{seconds_number, Scene};
use reels_core::video_model::VideoModel;

use crate::adapter::{endpoint, send_json, string_field, Submission, VideoProvider, DEFAULT_ASPECT_RATIO};
use crate::error::ProviderError;

pub struct GrokAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GrokAdapter {
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
                model: VideoModel::Grok,
            })
    }
}

#[async_trait]
impl VideoProvider for GrokAdapter {
    fn model(&self) -> VideoModel {
        VideoModel::Grok
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
        // Grok names the audio and framing fields differently from Veo.
        let body = json!({
            "prompt": scene.visual_prompt,
            "duration": seconds_number(scene.duration_secs),
            "audio_description": scene.audio_prompt,
            "format": options.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO),
        });

        let request = self
            .client
            .post(endpoint(&self.base_url, "/v1/grok/video"))
            .bearer_auth(api_key)
            .json(&body);
        let reply = send_json(request).await?;

        Ok(Submission {
            video_url: string_field(&reply, &["url"]),
            job_id: string_field(&reply, &["id"]),
        })
    }
}
