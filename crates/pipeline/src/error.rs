//! Error types for the text-generation client and the script pipeline.

/// Failure of a single text-generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No API key was configured for the text-generation service.
    #[error("Text generation API key not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Text generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The completion carried no message content.
    #[error("Completion contained no message content")]
    EmptyCompletion,

    /// The message content did not parse as JSON.
    #[error("Completion is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The message content parsed, but not to a JSON object.
    #[error("Completion JSON is not an object")]
    NotAnObject,
}

/// Failure of one pipeline stage. The underlying call error is kept as the
/// source so it can be logged without being shown to clients.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to analyze idea")]
    AnalysisFailed(#[source] GenerationError),

    #[error("Failed to craft story")]
    StoryCraftFailed(#[source] GenerationError),

    #[error("Failed to generate scene prompts")]
    ScenePromptFailed(#[source] GenerationError),
}
