//! Request extractors.
//!
//! Every inbound surface (body, query string, path parameters) funnels its
//! rejection through [`AppError`], so a malformed request always gets the
//! structured `{"error": …}` JSON body instead of axum's plain-text default.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError::Validation`].
///
/// This is the schema-validation boundary: payload types deny unknown
/// fields, so a malformed or padded body becomes a structured 400 before
/// any store operation runs.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ValidatedJson<T>(pub T);

/// Query-string extractor whose rejection is an [`AppError::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ValidatedQuery<T>(pub T);

/// Path-parameter extractor whose rejection is an [`AppError::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ValidatedPath<T>(pub T);
