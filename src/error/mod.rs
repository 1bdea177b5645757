//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError` enum
//! serves as the top-level error type; its `IntoResponse` impl is the single
//! error-kind-to-status lookup table applied at the HTTP boundary.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
///
/// Aggregates every failure the service can report. Domain errors carry the
/// message rendered to the client; infrastructure errors (database, IO) are
/// logged server-side and rendered as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// IO error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced user does not exist. Results in 404 Not Found.
    #[error("{0}")]
    UserNotFound(String),

    /// Referenced item does not exist. Results in 404 Not Found.
    #[error("{0}")]
    ItemNotFound(String),

    /// Referenced booking does not exist, or the caller is not allowed to see
    /// it. Visibility failures deliberately reuse this variant so a foreign
    /// booking is indistinguishable from a nonexistent one. Results in 404.
    #[error("{0}")]
    BookingNotFound(String),

    /// Referenced item request does not exist. Results in 404 Not Found.
    #[error("{0}")]
    RequestNotFound(String),

    /// Caller attempted to mutate an item they do not own. Results in 403.
    #[error("{0}")]
    OwnershipViolation(String),

    /// An owner attempted to book their own item. Mapped to 404, matching the
    /// not-found treatment the rest of the booking visibility rules use.
    #[error("{0}")]
    BookingOwnershipViolation(String),

    /// Invalid request: unavailable item, inverted date range, transition on a
    /// terminal booking, or comment without a finished booking. Results in 400.
    #[error("{0}")]
    BadRequest(String),

    /// Booking state filter string not in the supported set.
    ///
    /// Mapped to 500 Internal Server Error. This mirrors the upstream status
    /// taxonomy even though a client-supplied filter string smells like a 400;
    /// callers depend on the 500 and on this exact message.
    #[error("Unknown state: UNSUPPORTED_STATUS")]
    UnsupportedState,

    /// Field-level validation failures at the request boundary.
    ///
    /// Results in 400 Bad Request with a JSON list of `field: message` strings.
    #[error("Validation failed")]
    Validation(Vec<String>),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation`
/// - 403 Forbidden - For `OwnershipViolation`
/// - 404 Not Found - For the not-found family and `BookingOwnershipViolation`
/// - 500 Internal Server Error - For `UnsupportedState` and infrastructure errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(msg)
            | Self::ItemNotFound(msg)
            | Self::BookingNotFound(msg)
            | Self::RequestNotFound(msg)
            | Self::BookingOwnershipViolation(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::OwnershipViolation(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(messages) => {
                (StatusCode::BAD_REQUEST, Json(messages)).into_response()
            }
            Self::UnsupportedState => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: AppError::UnsupportedState.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
