use std::error::Error as StdError;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reels_core::error::CoreError;

/// Body text for a request missing `idea` or `platform`.
pub const MISSING_IDEA_OR_PLATFORM: &str = "Missing required fields: idea and platform";

/// Body text for a `script` that cannot be read as a script document.
pub const INVALID_SCRIPT: &str = "Invalid script format";

/// Body texts for request bodies the JSON extractor refuses.
pub const EXPECTED_JSON_CONTENT_TYPE: &str = "Expected request with Content-Type: application/json";
pub const MALFORMED_JSON: &str = "Request body is not valid JSON";
pub const INVALID_JSON_FIELDS: &str = "Request body has invalid fields";
pub const UNREADABLE_BODY: &str = "Invalid request body";

/// Application-level error type for HTTP handlers.
///
/// Validation problems map to 400 with `{ error, code }`. Failed operations
/// map to 500 with a stable `error` summary plus the top-level cause in
/// `message`; the full cause chain is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reels_core` (unknown platform or model).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An operation failed after its input was accepted.
    #[error("{summary}: {source}")]
    Operation {
        /// Stable, client-facing description of the failed operation.
        summary: &'static str,
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that wraps any error as a failure of the
    /// operation named by `summary`.
    ///
    /// ```ignore
    /// pipeline.analyze_idea(idea, platform).await.map_err(AppError::operation("Failed to analyze idea"))?;
    /// ```
    pub fn operation<E>(summary: &'static str) -> impl FnOnce(E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        move |err| Self::Operation {
            summary,
            source: Box::new(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    /// Serde's own message names Rust types and byte offsets; it is only
    /// logged, and the client gets a fixed message per rejection kind.
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), detail = %rejection.body_text(), "Rejected request body");
        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => EXPECTED_JSON_CONTENT_TYPE,
            JsonRejection::JsonSyntaxError(_) => MALFORMED_JSON,
            JsonRejection::JsonDataError(_) => INVALID_JSON_FIELDS,
            _ => UNREADABLE_BODY,
        };
        AppError::BadRequest(message.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => {
                let code = match core {
                    CoreError::UnknownPlatform(_) => "INVALID_PLATFORM",
                    CoreError::UnsupportedModel(_) => "INVALID_MODEL",
                };
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": core.to_string(), "code": code }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::Operation { summary, source } => {
                tracing::error!(error = %summary, cause = %error_chain(source.as_ref()), "Operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": summary,
                        "message": source.to_string(),
                        "code": "OPERATION_FAILED",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Render an error and all of its sources as `a: b: c`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
