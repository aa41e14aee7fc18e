use async_trait::async_trait;

use crate::error::GenerationError;

/// A JSON object returned by a text generator.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// An external text-generation capability that answers with structured JSON.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `user_prompt` under `system_prompt` at the given sampling
    /// temperature, returning the reply parsed as a JSON object.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f64,
    ) -> Result<JsonObject, GenerationError>;
}
