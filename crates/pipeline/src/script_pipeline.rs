//! The three-stage script pipeline.

use std::sync::Arc;

use serde_json::Value;

use reels_core::platform::Platform;
use reels_core::script::{new_id, Scene, ScriptDocument, ScriptMetadata, StoryDraft};

use crate::error::PipelineError;
use crate::generator::{JsonObject, TextGenerator};
use crate::parse::{scenes_from_object, story_from_object, SceneDraft};
use crate::prompts;

/// Number of scenes requested from the scene-prompt stage.
pub const DEFAULT_SCENE_COUNT: usize = 5;

/// Turns an idea into a [`ScriptDocument`].
///
/// Holds no state besides its generator, so one instance can serve any
/// number of concurrent requests.
#[derive(Clone)]
pub struct ScriptPipeline {
    generator: Arc<dyn TextGenerator>,
}

impl ScriptPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Stage 1: analyze the idea against the platform's constraints.
    ///
    /// The analysis schema is left to the generator; it is only required to
    /// be a JSON object.
    pub async fn analyze_idea(
        &self,
        idea: &str,
        platform: Platform,
    ) -> Result<JsonObject, PipelineError> {
        let prompt = prompts::analysis_prompt(idea, platform);
        let analysis = self
            .generator
            .complete(
                prompts::ANALYSIS_SYSTEM_PROMPT,
                &prompt,
                prompts::ANALYSIS_TEMPERATURE,
            )
            .await
            .map_err(PipelineError::AnalysisFailed)?;

        tracing::debug!(%platform, fields = analysis.len(), "Idea analyzed");
        Ok(analysis)
    }

    /// Stage 2: craft a story from the idea and its analysis.
    pub async fn craft_story(
        &self,
        idea: &str,
        platform: Platform,
        analysis: &JsonObject,
    ) -> Result<StoryDraft, PipelineError> {
        let prompt = prompts::story_prompt(idea, platform, analysis);
        let reply = self
            .generator
            .complete(prompts::STORY_SYSTEM_PROMPT, &prompt, prompts::STORY_TEMPERATURE)
            .await
            .map_err(PipelineError::StoryCraftFailed)?;

        let story = story_from_object(&reply);
        tracing::debug!(%platform, title = %story.title, "Story crafted");
        Ok(story)
    }

    /// Stage 3: break the story into `scene_count` scene prompts.
    ///
    /// A reply without a `scenes` array yields no scenes rather than an
    /// error. The generator may also return a different number of scenes
    /// than requested; they are passed through as-is.
    pub async fn generate_scene_prompts(
        &self,
        story: &StoryDraft,
        platform: Platform,
        scene_count: usize,
    ) -> Result<Vec<SceneDraft>, PipelineError> {
        let prompt = prompts::scene_prompt(story, platform, scene_count);
        let reply = self
            .generator
            .complete(prompts::SCENE_SYSTEM_PROMPT, &prompt, prompts::SCENE_TEMPERATURE)
            .await
            .map_err(PipelineError::ScenePromptFailed)?;

        let scenes = scenes_from_object(&reply);
        if scenes.is_empty() {
            tracing::warn!(%platform, "Scene prompt reply contained no scenes");
        }
        Ok(scenes)
    }

    /// Run all three stages in order and assemble the script.
    ///
    /// The first failing stage's error is returned unchanged and no partial
    /// document is produced.
    pub async fn generate_complete_script(
        &self,
        idea: &str,
        platform: Platform,
    ) -> Result<ScriptDocument, PipelineError> {
        let analysis = self.analyze_idea(idea, platform).await?;
        let story = self.craft_story(idea, platform, &analysis).await?;
        let drafts = self
            .generate_scene_prompts(&story, platform, DEFAULT_SCENE_COUNT)
            .await?;

        let metadata = ScriptMetadata {
            analysis: Value::Object(analysis),
            hook: story.hook,
            cta: story.cta,
            key_messages: story.key_messages,
            aspect_ratio: None,
        };
        let mut document = ScriptDocument::new(
            story.title,
            platform,
            idea.to_string(),
            story.story,
            metadata,
        );

        // Fallback durations split the recommended length over the scenes
        // actually returned, not over the number requested.
        let fallback_secs = prompts::per_scene_duration(platform, drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            document.add_scene(scene_from_draft(index, draft, fallback_secs));
        }

        tracing::info!(
            script_id = %document.id,
            %platform,
            scenes = document.scenes().len(),
            total_duration_secs = document.total_duration_secs(),
            "Script generated"
        );
        Ok(document)
    }
}

fn scene_from_draft(index: usize, draft: SceneDraft, fallback_secs: u32) -> Scene {
    Scene {
        id: new_id(),
        scene_number: u32::try_from(index + 1).unwrap_or(u32::MAX),
        description: draft.description.unwrap_or_default(),
        duration_secs: draft.duration_secs.unwrap_or(f64::from(fallback_secs)),
        visual_prompt: draft.visual_prompt.unwrap_or_default(),
        audio_prompt: draft.audio_prompt.unwrap_or_default(),
        text_overlay: draft.text_overlay,
        transition: draft.transition,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
