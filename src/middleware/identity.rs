//! Caller identity extraction.
//!
//! Every authenticated route identifies its caller through the
//! `X-Sharer-User-Id` header. The `SharerId` extractor pulls and parses the
//! header before the handler runs; existence of the user is checked later by
//! the services, which own the not-found semantics per operation.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Name of the header carrying the calling user's id.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Extractor for the calling user's id.
///
/// Rejects the request with 400 Bad Request when the header is missing or not
/// a valid integer id.
pub struct SharerId(pub i64);

impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SHARER_USER_ID_HEADER)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Missing {} header", SHARER_USER_ID_HEADER))
            })?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Invalid {} header", SHARER_USER_ID_HEADER))
            })?;

        Ok(SharerId(user_id))
    }
}
