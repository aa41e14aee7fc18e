/// Default base URL of the hosted Veo 3 API.
pub const DEFAULT_VEO3_BASE_URL: &str = "https://api.veo3.ai";

/// Default base URL of the hosted Grok API.
pub const DEFAULT_GROK_BASE_URL: &str = "https://api.x.ai";

/// Default endpoint of the local WAN 2.1 renderer.
pub const DEFAULT_WAN2_1_ENDPOINT: &str = "http://localhost:8001";

/// Default endpoint of the local WAN 2.2 renderer.
pub const DEFAULT_WAN2_2_ENDPOINT: &str = "http://localhost:8002";

/// Credentials and endpoints for every provider.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub veo3_api_key: Option<String>,
    pub veo3_base_url: String,
    pub grok_api_key: Option<String>,
    pub grok_base_url: String,
    pub wan2_1_endpoint: String,
    pub wan2_2_endpoint: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            veo3_api_key: None,
            veo3_base_url: DEFAULT_VEO3_BASE_URL.to_string(),
            grok_api_key: None,
            grok_base_url: DEFAULT_GROK_BASE_URL.to_string(),
            wan2_1_endpoint: DEFAULT_WAN2_1_ENDPOINT.to_string(),
            wan2_2_endpoint: DEFAULT_WAN2_2_ENDPOINT.to_string(),
        }
    }
}
