//! Prompt construction for the three pipeline stages.
//!
//! Every builder embeds the platform's constraints so the text generator
//! plans within the platform's duration and framing limits.

use reels_core::platform::{Platform, PlatformSpec};
use reels_core::script::StoryDraft;

use crate::generator::JsonObject;

// ---------------------------------------------------------------------------
// Sampling temperatures
// ---------------------------------------------------------------------------

pub const ANALYSIS_TEMPERATURE: f64 = 0.7;

/// Story crafting samples slightly hotter for more varied narratives.
pub const STORY_TEMPERATURE: f64 = 0.8;

pub const SCENE_TEMPERATURE: f64 = 0.7;

// ---------------------------------------------------------------------------
// System prompts
// ---------------------------------------------------------------------------

pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert social media content strategist specializing in viral video content.";

pub const STORY_SYSTEM_PROMPT: &str =
    "You are a viral content storyteller who creates engaging narratives optimized for social media.";

pub const SCENE_SYSTEM_PROMPT: &str = "You are an expert at creating detailed visual prompts for AI video generation, specializing in viral social media content.";

// ---------------------------------------------------------------------------
// User prompts
// ---------------------------------------------------------------------------

/// Stage 1: ask for a structured analysis of the idea.
pub fn analysis_prompt(idea: &str, platform: Platform) -> String {
    let spec = platform.spec();
    format!(
        r#"Analyze this video idea for {platform}:
"{idea}"

Consider:
- Platform: {platform}
- Max duration: {max}s
- Recommended duration: {recommended}s
- Aspect ratio: {aspect}
- Key hooks: {hooks}

Provide:
1. Viral potential score (1-10)
2. Target audience
3. Key improvement suggestions
4. Trending topics that align with this idea

Format as JSON."#,
        max = spec.max_duration_secs,
        recommended = spec.recommended_duration_secs,
        aspect = spec.aspect_ratio,
        hooks = hook_list(spec),
    )
}

/// Stage 2: ask for a story built on the idea and its analysis.
pub fn story_prompt(idea: &str, platform: Platform, analysis: &JsonObject) -> String {
    let spec = platform.spec();
    let analysis = serde_json::Value::Object(analysis.clone());
    format!(
        r#"Create an engaging story for a {platform} video based on:
Idea: "{idea}"
Analysis: {analysis}

Requirements:
- Duration: {recommended}s
- Aspect ratio: {aspect}
- Must include: {hooks}

Create a compelling narrative arc with:
1. Hook (first 3 seconds)
2. Build-up
3. Climax/Value delivery
4. Call-to-action

Format as JSON with: title, hook, story, cta, keyMessages."#,
        recommended = spec.recommended_duration_secs,
        aspect = spec.aspect_ratio,
        hooks = hook_list(spec),
    )
}

/// Stage 3: ask for `scene_count` scene prompts covering the story.
pub fn scene_prompt(story: &StoryDraft, platform: Platform, scene_count: usize) -> String {
    let scene_duration = per_scene_duration(platform, scene_count);
    let story = serde_json::to_string(story).unwrap_or_default();
    format!(
        r#"Generate {scene_count} detailed scene prompts for:
Story: {story}
Platform: {platform}
Scene duration: ~{scene_duration}s each

For each scene provide:
1. Scene number (sceneNumber)
2. Description (description)
3. Visual prompt, highly detailed for video generation AI (visualPrompt)
4. Audio/music prompt (audioPrompt)
5. Text overlay suggestion (textOverlay)
6. Transition type (transition)
7. Duration in seconds (duration)

Format as a JSON object with a "scenes" array."#
    )
}

/// Whole seconds per scene when the platform's recommended duration is
/// split evenly across `scene_count` scenes.
pub fn per_scene_duration(platform: Platform, scene_count: usize) -> u32 {
    match u32::try_from(scene_count) {
        Ok(0) | Err(_) => 0,
        Ok(count) => platform.spec().recommended_duration_secs / count,
    }
}

fn hook_list(spec: &PlatformSpec) -> String {
    spec.hook_styles.join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn analysis_prompt_embeds_platform_constraints() {
        let prompt = analysis_prompt("cats doing yoga", Platform::TikTok);
        assert!(prompt.contains("\"cats doing yoga\""));
        assert!(prompt.contains("Max duration: 180s"));
        assert!(prompt.contains("Recommended duration: 60s"));
        assert!(prompt.contains("Aspect ratio: 9:16"));
        assert!(prompt.contains("trending sounds, quick cuts, text overlays"));
    }

    #[test]
    fn story_prompt_embeds_analysis() {
        let analysis = json!({ "targetAudience": "office workers" });
        let analysis = analysis.as_object().unwrap();
        let prompt = story_prompt("desk stretches", Platform::LinkedIn, analysis);
        assert!(prompt.contains("office workers"));
        assert!(prompt.contains("Duration: 90s"));
        assert!(prompt.contains("Aspect ratio: 16:9"));
        assert!(prompt.contains("title, hook, story, cta, keyMessages"));
    }

    #[test]
    fn scene_prompt_requests_count_and_duration() {
        let story = StoryDraft {
            title: "Desk Yoga".to_string(),
            ..StoryDraft::default()
        };
        let prompt = scene_prompt(&story, Platform::YouTube, 5);
        assert!(prompt.starts_with("Generate 5 detailed scene prompts"));
        assert!(prompt.contains("Desk Yoga"));
        assert!(prompt.contains("~9s each"));
        assert!(prompt.contains("\"scenes\" array"));
    }

    #[test]
    fn per_scene_duration_floors() {
        assert_eq!(per_scene_duration(Platform::TikTok, 5), 12);
        assert_eq!(per_scene_duration(Platform::YouTube, 4), 11);
        assert_eq!(per_scene_duration(Platform::Instagram, 7), 4);
    }

    #[test]
    fn per_scene_duration_zero_scenes() {
        assert_eq!(per_scene_duration(Platform::TikTok, 0), 0);
    }
}
