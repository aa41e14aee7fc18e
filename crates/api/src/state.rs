use std::sync::Arc;

use reels_pipeline::{OpenAiClient, ScriptPipeline, TextGenerator};
use reels_providers::ProviderDispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Nothing in here is mutable: the pipeline and the
/// dispatcher only hold read-only configuration and HTTP clients.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Idea → script pipeline.
    pub pipeline: Arc<ScriptPipeline>,
    /// Scene → video provider dispatch.
    pub dispatcher: Arc<ProviderDispatcher>,
}

impl AppState {
    /// Build production state: an OpenAI-backed pipeline and the provider
    /// dispatcher, sharing one HTTP connection pool.
    pub fn new(config: ServerConfig) -> Self {
        let client = reqwest::Client::new();
        let generator = Arc::new(OpenAiClient::with_client(
            client.clone(),
            config.openai.clone(),
        ));
        let dispatcher = ProviderDispatcher::with_client(client, config.providers.clone());
        Self::from_parts(config, generator, dispatcher)
    }

    /// Assemble state from an arbitrary text generator and dispatcher.
    pub fn from_parts(
        config: ServerConfig,
        generator: Arc<dyn TextGenerator>,
        dispatcher: ProviderDispatcher,
    ) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(ScriptPipeline::new(generator)),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
