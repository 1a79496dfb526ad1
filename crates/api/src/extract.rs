//! Request extractors whose rejections use the JSON error shape.
//!
//! Each wraps the axum extractor of the same role and converts its
//! rejection into [`AppError::BadRequest`], so a malformed body, query
//! string or path segment answers `400 BAD_REQUEST` in the usual
//! `{"error", "code"}` form instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Body extractor; drop-in replacement for [`axum::Json`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor; drop-in replacement for [`axum::extract::Query`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path-parameter extractor; drop-in replacement for [`axum::extract::Path`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
