//! Adapter for locally hosted WAN renderers (2.1 and 2.2 share one wire
//! format and differ only in endpoint).

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use reels_core::generation::GenerationOptions;
use reels_core::script::{seconds_number, Scene};
use reels_core::video_model::VideoModel;

use crate::adapter::{endpoint, send_json, string_field, Submission, VideoProvider};
use crate::error::ProviderError;

/// On-device rendering is slow; hosted providers use the client default.
pub const LOCAL_TIMEOUT: Duration = Duration::from_secs(300);

/// Output frame width in pixels (portrait 9:16).
pub const OUTPUT_WIDTH: u32 = 1080;

/// Output frame height in pixels (portrait 9:16).
pub const OUTPUT_HEIGHT: u32 = 1920;

pub const DEFAULT_FPS: u32 = 30;

/// Diffusion sampling steps when the caller gives none.
pub const DEFAULT_STEPS: u32 = 50;

pub struct WanAdapter {
    client: reqwest::Client,
    model: VideoModel,
    endpoint: String,
}

impl WanAdapter {
    pub fn new(client: reqwest::Client, model: VideoModel, endpoint: String) -> Self {
        Self {
            client,
            model,
            endpoint,
        }
    }
}

#[async_trait]
impl VideoProvider for WanAdapter {
    fn model(&self) -> VideoModel {
        self.model
    }

    // Endpoints always have a default, so local models are always ready.
    fn check_ready(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn submit(
        &self,
        scene: &Scene,
        options: &GenerationOptions,
    ) -> Result<Submission, ProviderError> {
        let body = json!({
            "prompt": scene.visual_prompt,
            "duration": seconds_number(scene.duration_secs),
            "audio_prompt": scene.audio_prompt,
            "width": OUTPUT_WIDTH,
            "height": OUTPUT_HEIGHT,
            "fps": options.fps.unwrap_or(DEFAULT_FPS),
            "steps": options.steps.unwrap_or(DEFAULT_STEPS),
        });

        let request = self
            .client
            .post(endpoint(&self.endpoint, "/generate"))
            .timeout(LOCAL_TIMEOUT)
            .json(&body);
        let reply = send_json(request).await?;

        Ok(Submission {
            video_url: string_field(&reply, &["video_url", "output_path"]),
            job_id: string_field(&reply, &["job_id"]),
        })
    }
}
