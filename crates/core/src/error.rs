use crate::platform::SUPPORTED_PLATFORMS;
use crate::video_model::SUPPORTED_MODELS;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid platform '{0}'. Supported platforms: {supported}", supported = SUPPORTED_PLATFORMS)]
    UnknownPlatform(String),

    #[error("Invalid model '{0}'. Supported models: {supported}", supported = SUPPORTED_MODELS)]
    UnsupportedModel(String),
}
