//! Chat-completions client for OpenAI-compatible text generation APIs.
//!
//! Requests JSON-object output (`response_format: json_object`) and parses
//! the first choice's message content into a [`JsonObject`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::GenerationError;
use crate::generator::{JsonObject, TextGenerator};

/// Default API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

/// Connection settings for [`OpenAiClient`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token. Calls fail with [`GenerationError::MissingApiKey`]
    /// while this is unset.
    pub api_key: Option<String>,
    /// Base URL without a trailing `/chat/completions`.
    pub base_url: String,
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// [`TextGenerator`] backed by the `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`] so connection
    /// pools are shared with other outbound callers.
    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f64,
    ) -> Result<JsonObject, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": temperature,
            "response_format": { "type": "json_object" },
        });

        tracing::debug!(model = %self.config.model, temperature, "Requesting chat completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyCompletion)?;

        parse_json_object(&content)
    }
}

/// Parse completion text as a JSON object, tolerating a surrounding
/// Markdown code fence.
pub fn parse_json_object(content: &str) -> Result<JsonObject, GenerationError> {
    let text = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    match serde_json::from_str(text)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(GenerationError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_plain_object() {
        let map = parse_json_object(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(map["title"], "Hello");
    }

    #[test]
    fn strips_markdown_fence() {
        let map = parse_json_object("```json\n{\"scenes\": []}\n```").unwrap();
        assert!(map["scenes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn rejects_array() {
        assert_matches!(parse_json_object("[1, 2]"), Err(GenerationError::NotAnObject));
    }

    #[test]
    fn rejects_prose() {
        assert_matches!(
            parse_json_object("Sure! Here is your story."),
            Err(GenerationError::InvalidJson(_))
        );
    }

    #[test]
    fn completions_url_ignores_trailing_slash() {
        let client = OpenAiClient::new(OpenAiConfig {
            base_url: "http://localhost:9000/v1/".to_string(),
            ..OpenAiConfig::default()
        });
        assert_eq!(
            client.completions_url(),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = OpenAiClient::new(OpenAiConfig {
            // Unroutable: the call must not get this far.
            base_url: "http://127.0.0.1:1".to_string(),
            ..OpenAiConfig::default()
        });
        let result = client.complete("system", "user", 0.7).await;
        assert_matches!(result, Err(GenerationError::MissingApiKey));
    }
}
