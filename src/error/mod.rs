//! Error types for the Holocron server application.
//!
//! Domain-specific error enums (authentication, configuration, missing
//! resources) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` so any handler failure becomes a JSON body of the
//! shape `{"message": ..., "error": true}` with the matching status code.

pub mod auth;
pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, resource::ResourceError},
    model::api::ErrorDto,
};

/// Main error type for the Holocron server application.
///
/// Uses `thiserror`'s `#[from]` attribute to enable automatic conversion from
/// underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing or invalid token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A requested resource does not exist.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Token encoding error when issuing a login token.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Authentication and resource errors carry their own response mappings;
/// everything else is treated as an internal server error with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// The full error is logged for debugging while the client receives a generic
/// message, avoiding leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
