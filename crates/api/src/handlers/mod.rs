pub mod catalog;
pub mod create;
pub mod script;
pub mod video;

use reels_core::video_model::VideoModel;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Parse an optional `model` field, defaulting to [`VideoModel::default`]
/// when it is absent.
pub(crate) fn parse_model(model: Option<&str>) -> AppResult<VideoModel> {
    Ok(model.map(str::parse::<VideoModel>).transpose()?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use reels_core::error::CoreError;

    use super::*;
    use crate::error::AppError;

    #[test]
    fn absent_model_defaults_to_veo3() {
        assert_eq!(parse_model(None).unwrap(), VideoModel::Veo3);
    }

    #[test]
    fn known_model_is_parsed() {
        assert_eq!(parse_model(Some("wan2.2")).unwrap(), VideoModel::Wan22);
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert_matches!(
            parse_model(Some("sora")),
            Err(AppError::Core(CoreError::UnsupportedModel(m))) if m == "sora"
        );
    }
}
