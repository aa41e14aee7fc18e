//! Script document model: the structured output of the script pipeline and
//! the input of video generation.
//!
//! Serialized field names are camelCase to match the JSON documents clients
//! send back for video generation. Every field except `platform` and
//! `scenes` is optional on the way in, so a document edited or trimmed by a
//! client can still be reconstructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::platform::Platform;

/// Generate a fresh document or scene identifier.
///
/// Identifiers only need to be unique within a process lifetime; UUIDv7
/// additionally keeps them roughly time-ordered.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

// ---------------------------------------------------------------------------
// StoryDraft
// ---------------------------------------------------------------------------

/// Narrative produced by the story-crafting stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryDraft {
    pub title: String,
    /// Opening line meant to hold attention for the first seconds.
    pub hook: String,
    pub story: String,
    /// Call to action closing the video.
    pub cta: String,
    pub key_messages: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// One narrative beat of a script, carrying the prompts a video model needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default = "new_id", deserialize_with = "id_or_new")]
    pub id: String,
    /// 1-based position in the script.
    #[serde(default, deserialize_with = "null_as_default")]
    pub scene_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        rename = "duration",
        default,
        deserialize_with = "null_as_default",
        serialize_with = "serialize_seconds"
    )]
    pub duration_secs: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visual_prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub audio_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_overlay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

// ---------------------------------------------------------------------------
// ScriptMetadata
// ---------------------------------------------------------------------------

/// Side information carried alongside the scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptMetadata {
    /// Free-form idea analysis, forwarded as returned by the text generator.
    pub analysis: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub hook: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_messages: Vec<String>,
    /// Explicit framing override; when absent the platform's ratio applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

// ---------------------------------------------------------------------------
// ScriptDocument
// ---------------------------------------------------------------------------

/// A complete script for one idea on one platform.
///
/// Scenes are in narrative order and can only be appended; once a document
/// is handed to a caller it is treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDocument {
    #[serde(default = "new_id", deserialize_with = "id_or_new")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub platform: Platform,
    #[serde(default, deserialize_with = "null_as_default")]
    pub idea: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub story: String,
    scenes: Vec<Scene>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ScriptMetadata,
    #[serde(default = "Utc::now", deserialize_with = "timestamp_or_now")]
    pub created_at: DateTime<Utc>,
}

impl ScriptDocument {
    /// Create a document with no scenes yet.
    pub fn new(
        title: String,
        platform: Platform,
        idea: String,
        story: String,
        metadata: ScriptMetadata,
    ) -> Self {
        Self {
            id: new_id(),
            title,
            platform,
            idea,
            story,
            scenes: Vec::new(),
            metadata,
            created_at: Utc::now(),
        }
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Sum of all scene durations. Advisory only: it should land near the
    /// platform's recommended duration but nothing enforces that.
    pub fn total_duration_secs(&self) -> f64 {
        self.scenes.iter().map(|s| s.duration_secs).sum()
    }

    /// Aspect ratio video generation should use for this document.
    pub fn aspect_ratio(&self) -> &str {
        self.metadata
            .aspect_ratio
            .as_deref()
            .unwrap_or(self.platform.spec().aspect_ratio)
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Seconds as a JSON number: an integer when the value is whole, otherwise
/// a float. Providers receive `12`, not `12.0`.
pub fn seconds_number(secs: f64) -> serde_json::Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if secs.is_finite() && secs.fract() == 0.0 && secs.abs() <= MAX_EXACT {
        serde_json::Value::from(secs as i64)
    } else {
        serde_json::Value::from(secs)
    }
}

fn serialize_seconds<S: Serializer>(secs: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    seconds_number(*secs).serialize(serializer)
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_or_new<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|id| !id.is_empty())
        .unwrap_or_else(new_id))
}

fn timestamp_or_now<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
