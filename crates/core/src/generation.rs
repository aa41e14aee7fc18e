//! Per-scene video generation results and their per-script aggregate.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::script::Scene;
use crate::video_model::VideoModel;

/// Caller-supplied tuning knobs for a generation request.
///
/// Each adapter reads only the fields its provider understands and applies
/// its own default for anything left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

// ---------------------------------------------------------------------------
// GenerationResult
// ---------------------------------------------------------------------------

/// How a single provider call ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationOutcome {
    Success {
        #[serde(rename = "videoUrl", skip_serializing_if = "Option::is_none")]
        video_url: Option<String>,
        #[serde(rename = "jobId", skip_serializing_if = "Option::is_none")]
        job_id: Option<String>,
    },
    Error {
        error: String,
    },
}

/// Outcome of generating one scene with one model, with a snapshot of the
/// scene that was sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub model: VideoModel,
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
    pub scene: Scene,
}

impl GenerationResult {
    pub fn success(
        model: VideoModel,
        scene: Scene,
        video_url: Option<String>,
        job_id: Option<String>,
    ) -> Self {
        Self {
            model,
            outcome: GenerationOutcome::Success { video_url, job_id },
            scene,
        }
    }

    pub fn failure(model: VideoModel, scene: Scene, error: impl Into<String>) -> Self {
        Self {
            model,
            outcome: GenerationOutcome::Error {
                error: error.into(),
            },
            scene,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Success { .. })
    }
}

// ---------------------------------------------------------------------------
// AggregateResult
// ---------------------------------------------------------------------------

/// All scene outcomes for one script, in scene order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub script_id: String,
    pub platform: Platform,
    pub model: VideoModel,
    pub scenes: Vec<GenerationResult>,
    pub total_scenes: usize,
    pub successful_scenes: usize,
}

impl AggregateResult {
    /// Build the aggregate, deriving the counters from `scenes`.
    pub fn new(
        script_id: String,
        platform: Platform,
        model: VideoModel,
        scenes: Vec<GenerationResult>,
    ) -> Self {
        let total_scenes = scenes.len();
        let successful_scenes = scenes.iter().filter(|r| r.is_success()).count();
        Self {
            script_id,
            platform,
            model,
            scenes,
            total_scenes,
            successful_scenes,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
