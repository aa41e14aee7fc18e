//! Lenient conversion of loosely-shaped generator output into typed drafts.
//!
//! Generators answer with whatever JSON they like. Fields that are missing
//! or of the wrong type fall back to defaults instead of failing the stage.
//! Both camelCase and snake_case keys are accepted.

use serde_json::Value;

use reels_core::script::StoryDraft;

use crate::generator::JsonObject;

/// One scene as described by the scene-prompt stage, before numbering and
/// duration defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDraft {
    pub description: Option<String>,
    /// Only positive, finite durations are kept.
    pub duration_secs: Option<f64>,
    pub visual_prompt: Option<String>,
    pub audio_prompt: Option<String>,
    pub text_overlay: Option<String>,
    pub transition: Option<String>,
}

impl SceneDraft {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            description: text(obj, &["description"]),
            duration_secs: number(obj, &["duration", "durationSeconds", "duration_seconds"])
                .filter(|d| d.is_finite() && *d > 0.0),
            visual_prompt: text(obj, &["visualPrompt", "visual_prompt"]),
            audio_prompt: text(obj, &["audioPrompt", "audio_prompt"]),
            text_overlay: text(obj, &["textOverlay", "text_overlay"]),
            transition: text(obj, &["transition"]),
        }
    }
}

/// Build a [`StoryDraft`] from the story stage's reply.
pub fn story_from_object(obj: &JsonObject) -> StoryDraft {
    StoryDraft {
        title: text(obj, &["title"]).unwrap_or_default(),
        hook: text(obj, &["hook"]).unwrap_or_default(),
        story: text(obj, &["story"]).unwrap_or_default(),
        cta: text(obj, &["cta", "callToAction", "call_to_action"]).unwrap_or_default(),
        key_messages: text_list(obj, &["keyMessages", "key_messages"]),
    }
}

/// Extract the scene list from the scene stage's reply. A missing or
/// non-array `scenes` field yields an empty list.
pub fn scenes_from_object(obj: &JsonObject) -> Vec<SceneDraft> {
    obj.get("scenes")
        .and_then(Value::as_array)
        .map(|scenes| scenes.iter().map(SceneDraft::from_value).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn field<'a>(obj: &'a JsonObject, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k)).filter(|v| !v.is_null())
}

/// Strings are taken as-is; numbers and booleans are rendered to text.
fn text(obj: &JsonObject, keys: &[&str]) -> Option<String> {
    match field(obj, keys)? {
        Value::String(s) => Some(s.clone()),
        v @ (Value::Number(_) | Value::Bool(_)) => Some(v.to_string()),
        _ => None,
    }
}

fn number(obj: &JsonObject, keys: &[&str]) -> Option<f64> {
    match field(obj, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('s').trim().parse().ok(),
        _ => None,
    }
}

/// A list of strings, or a single string as a one-element list.
fn text_list(obj: &JsonObject, keys: &[&str]) -> Vec<String> {
    match field(obj, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn story_reads_all_fields() {
        let story = story_from_object(&object(json!({
            "title": "Five AM Club",
            "hook": "Nobody tells you this",
            "story": "An early riser's day.",
            "cta": "Follow for part 2",
            "keyMessages": ["discipline", "sunlight", 3]
        })));

        assert_eq!(story.title, "Five AM Club");
        assert_eq!(story.cta, "Follow for part 2");
        assert_eq!(story.key_messages, vec!["discipline", "sunlight"]);
    }

    #[test]
    fn story_defaults_missing_fields() {
        let story = story_from_object(&object(json!({ "title": "Only a title" })));
        assert_eq!(story.title, "Only a title");
        assert!(story.story.is_empty());
        assert!(story.key_messages.is_empty());
    }

    #[test]
    fn story_accepts_single_key_message_string() {
        let story = story_from_object(&object(json!({ "key_messages": "be kind" })));
        assert_eq!(story.key_messages, vec!["be kind"]);
    }

    #[test]
    fn scene_reads_camel_and_snake_case() {
        let camel = SceneDraft::from_value(&json!({
            "visualPrompt": "drone shot over a lake",
            "audioPrompt": "ambient piano",
            "textOverlay": "Breathe",
            "duration": 8
        }));
        let snake = SceneDraft::from_value(&json!({
            "visual_prompt": "drone shot over a lake",
            "audio_prompt": "ambient piano",
            "text_overlay": "Breathe",
            "duration": 8
        }));

        assert_eq!(camel, snake);
        assert_eq!(camel.duration_secs, Some(8.0));
    }

    #[test]
    fn scene_drops_non_positive_duration() {
        let zero = SceneDraft::from_value(&json!({ "duration": 0 }));
        let negative = SceneDraft::from_value(&json!({ "duration": -3 }));
        assert_eq!(zero.duration_secs, None);
        assert_eq!(negative.duration_secs, None);
    }

    #[test]
    fn scene_parses_duration_strings() {
        let draft = SceneDraft::from_value(&json!({ "duration": "6s" }));
        assert_eq!(draft.duration_secs, Some(6.0));
    }

    #[test]
    fn scene_from_non_object_is_empty() {
        assert_eq!(SceneDraft::from_value(&json!("scene one")), SceneDraft::default());
    }

    #[test]
    fn missing_scenes_field_is_empty_list() {
        assert!(scenes_from_object(&object(json!({ "shots": [] }))).is_empty());
        assert!(scenes_from_object(&object(json!({ "scenes": "none" }))).is_empty());
    }

    #[test]
    fn scenes_keep_order() {
        let scenes = scenes_from_object(&object(json!({
            "scenes": [
                { "description": "first" },
                { "description": "second" }
            ]
        })));
        let descriptions: Vec<_> = scenes.iter().map(|s| s.description.as_deref()).collect();
        assert_eq!(descriptions, vec![Some("first"), Some("second")]);
    }
}
