use reels_core::video_model::VideoModel;

/// Errors from the provider layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A hosted provider was selected but its API key is not configured.
    /// This is a precondition failure and aborts the whole batch.
    #[error("{model} API key not configured")]
    MissingCredential { model: VideoModel },

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ProviderError {
    /// Whether this error must abort the caller instead of being recorded
    /// as a failed scene.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ProviderError::MissingCredential { .. })
    }
}
