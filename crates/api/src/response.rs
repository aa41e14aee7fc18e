//! Shared response envelope for API handlers.
//!
//! Successful API responses are a JSON object with `"success": true` next to
//! the payload fields, e.g. `{ "success": true, "script": { ... } }`.

use axum::Json;
use serde::Serialize;

/// `{ "success": true, ...body }` response envelope.
///
/// `T` must serialize to a JSON object; its fields are flattened into the
/// envelope.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn ok(body: T) -> Json<Self> {
        Json(Self {
            success: true,
            body,
        })
    }
}
