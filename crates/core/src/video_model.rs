//! Video generation model identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Human-readable list of model identifiers, used in validation messages.
pub const SUPPORTED_MODELS: &str = "veo3, grok, wan2.1, wan2.2";

/// A video generation back end.
///
/// `Veo3` and `Grok` are hosted services gated by an API key; the two WAN
/// versions are local renderers addressed by a configured endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoModel {
    #[default]
    #[serde(rename = "veo3")]
    Veo3,
    #[serde(rename = "grok")]
    Grok,
    #[serde(rename = "wan2.1")]
    Wan21,
    #[serde(rename = "wan2.2")]
    Wan22,
}

impl VideoModel {
    /// Every model, in catalog order.
    pub const ALL: [VideoModel; 4] = [
        VideoModel::Veo3,
        VideoModel::Grok,
        VideoModel::Wan21,
        VideoModel::Wan22,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoModel::Veo3 => "veo3",
            VideoModel::Grok => "grok",
            VideoModel::Wan21 => "wan2.1",
            VideoModel::Wan22 => "wan2.2",
        }
    }
}

impl fmt::Display for VideoModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnsupportedModel(s.to_string()))
    }
}
