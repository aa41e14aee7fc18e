//! Platform catalog: the closed set of target social platforms and the
//! content constraints each one imposes on a generated video.
//!
//! The catalog is static data compiled into the binary, so it is read-only
//! for the lifetime of the process and needs no initialisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Human-readable list of platform identifiers, used in validation messages.
pub const SUPPORTED_PLATFORMS: &str = "tiktok, instagram, youtube, facebook, linkedin";

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// A target distribution channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Facebook,
    LinkedIn,
}

impl Platform {
    /// Every platform, in catalog order.
    pub const ALL: [Platform; 5] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::YouTube,
        Platform::Facebook,
        Platform::LinkedIn,
    ];

    /// Wire identifier of the platform (e.g. `"tiktok"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
            Platform::Facebook => "facebook",
            Platform::LinkedIn => "linkedin",
        }
    }

    /// Content constraints for this platform.
    pub fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::TikTok => &TIKTOK,
            Platform::Instagram => &INSTAGRAM,
            Platform::YouTube => &YOUTUBE,
            Platform::Facebook => &FACEBOOK,
            Platform::LinkedIn => &LINKEDIN,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PlatformSpec
// ---------------------------------------------------------------------------

/// Duration and framing constraints for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSpec {
    /// Hard upper bound on video length.
    #[serde(rename = "maxDuration")]
    pub max_duration_secs: u32,
    /// Frame aspect ratio, e.g. `"9:16"`.
    pub aspect_ratio: &'static str,
    /// Target length the script pipeline plans scenes around.
    #[serde(rename = "recommendedDuration")]
    pub recommended_duration_secs: u32,
    /// Engagement techniques the platform rewards, in priority order.
    pub hook_styles: &'static [&'static str],
}

const TIKTOK: PlatformSpec = PlatformSpec {
    max_duration_secs: 180,
    aspect_ratio: "9:16",
    recommended_duration_secs: 60,
    hook_styles: &["trending sounds", "quick cuts", "text overlays"],
};

const INSTAGRAM: PlatformSpec = PlatformSpec {
    max_duration_secs: 90,
    aspect_ratio: "9:16",
    recommended_duration_secs: 30,
    hook_styles: &["music integration", "transitions", "captions"],
};

// Shorts limits, not long-form.
const YOUTUBE: PlatformSpec = PlatformSpec {
    max_duration_secs: 60,
    aspect_ratio: "9:16",
    recommended_duration_secs: 45,
    hook_styles: &["storytelling", "thumbnails", "end screens"],
};

const FACEBOOK: PlatformSpec = PlatformSpec {
    max_duration_secs: 60,
    aspect_ratio: "9:16",
    recommended_duration_secs: 30,
    hook_styles: &["engagement prompts", "shareability", "captions"],
};

const LINKEDIN: PlatformSpec = PlatformSpec {
    max_duration_secs: 180,
    aspect_ratio: "16:9",
    recommended_duration_secs: 90,
    hook_styles: &["professional tone", "insights", "value-driven"],
};

/// Look up the constraints for a platform identifier.
///
/// Fails with [`CoreError::UnknownPlatform`] for anything outside the
/// closed set of identifiers.
pub fn lookup(platform_id: &str) -> Result<&'static PlatformSpec, CoreError> {
    platform_id.parse::<Platform>().map(Platform::spec)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
