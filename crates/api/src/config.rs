use std::path::PathBuf;

use reels_pipeline::openai::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use reels_pipeline::OpenAiConfig;
use reels_providers::config::{
    DEFAULT_GROK_BASE_URL, DEFAULT_VEO3_BASE_URL, DEFAULT_WAN2_1_ENDPOINT,
    DEFAULT_WAN2_2_ENDPOINT,
};
use reels_providers::ProviderConfig;

/// An environment variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// Everything except the API keys has a default suitable for local
/// development. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Environment label, only logged (default: `development`).
    pub app_env: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds (default: `1800`). Has to cover a
    /// full batch of sequential local renders.
    pub request_timeout_secs: u64,
    /// Directory served for paths no route matches (default: `public`).
    pub static_dir: PathBuf,
    pub log_format: LogFormat,
    pub openai: OpenAiConfig,
    pub providers: ProviderConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `APP_ENV`              | `development`               |
    /// | `CORS_ORIGINS`         | `*`                         |
    /// | `REQUEST_TIMEOUT_SECS` | `1800`                      |
    /// | `STATIC_DIR`           | `public`                    |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)        |
    /// | `OPENAI_API_KEY`       | unset                       |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`         | `gpt-4`                     |
    /// | `VEO3_API_KEY`         | unset                       |
    /// | `VEO3_BASE_URL`        | `https://api.veo3.ai`       |
    /// | `GROK_API_KEY`         | unset                       |
    /// | `GROK_BASE_URL`        | `https://api.x.ai`          |
    /// | `WAN2_1_ENDPOINT`      | `http://localhost:8001`     |
    /// | `WAN2_2_ENDPOINT`      | `http://localhost:8002`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of
    /// a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        // Empty credentials count as unset.
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT", "3000");
        let port: u16 = port.trim().parse().map_err(|_| ConfigError {
            var: "PORT",
            expected: "a valid port number",
            value: port,
        })?;

        let timeout = var("REQUEST_TIMEOUT_SECS", "1800");
        let request_timeout_secs: u64 = timeout.trim().parse().map_err(|_| ConfigError {
            var: "REQUEST_TIMEOUT_SECS",
            expected: "a whole number of seconds",
            value: timeout,
        })?;

        let log_format = match var("LOG_FORMAT", "pretty").trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError {
                    var: "LOG_FORMAT",
                    expected: "one of 'pretty' or 'json'",
                    value: other.to_string(),
                })
            }
        };

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            app_env: var("APP_ENV", "development"),
            cors_origins,
            request_timeout_secs,
            static_dir: PathBuf::from(var("STATIC_DIR", "public")),
            log_format,
            openai: OpenAiConfig {
                api_key: secret("OPENAI_API_KEY"),
                base_url: var("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
                model: var("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            },
            providers: ProviderConfig {
                veo3_api_key: secret("VEO3_API_KEY"),
                veo3_base_url: var("VEO3_BASE_URL", DEFAULT_VEO3_BASE_URL),
                grok_api_key: secret("GROK_API_KEY"),
                grok_base_url: var("GROK_BASE_URL", DEFAULT_GROK_BASE_URL),
                wan2_1_endpoint: var("WAN2_1_ENDPOINT", DEFAULT_WAN2_1_ENDPOINT),
                wan2_2_endpoint: var("WAN2_2_ENDPOINT", DEFAULT_WAN2_2_ENDPOINT),
            },
        })
    }

    /// Whether CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
