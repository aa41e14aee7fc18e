//! Request extractors whose rejections render as `AppError`.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped through [`AppError`], so a body the
/// handler cannot read still gets a `{ error, code }` reply.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
