//! Error types for the skill test dashboard server.
//!
//! Each domain has its own `thiserror` enum; [`Error`] aggregates them so services
//! and controllers can use `?` throughout. Every error type implements
//! `IntoResponse`, mapping it to a status code and a JSON body.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::store::StoreError;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the server application.
///
/// # Error Categories
/// - Configuration errors (unparsable environment variables)
/// - Not found errors (users, skill tests, test results)
/// - Validation errors (request fields outside their bounds)
/// - Request errors (malformed path IDs or bodies)
/// - Entity store errors
#[derive(Error, Debug)]
pub enum Error {
    /// An environment variable is set to a value that cannot be parsed.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Request fields outside their declared bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Entity store failure.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// A path segment that should hold a numeric ID could not be parsed.
    #[error("Invalid {resource} ID: {value:?}")]
    InvalidId {
        resource: &'static str,
        value: String,
    },
    /// Request body could not be parsed as JSON of the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// Internal error indicating a bug or broken data integrity.
    #[error("Internal error, this indicates a bug or inconsistent data: {0:?}")]
    InternalError(String),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid IDs, malformed bodies, validation failures
/// - 404 Not Found - Missing users, skill tests, or test results
/// - 500 Internal Server Error - All other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFound(err) => err.into_response(),
            Self::Validation(err) => err.into_response(),
            Self::StoreError(StoreError::NotFound { collection, id }) => {
                tracing::debug!(collection = %collection, id = %id, "Record not found");

                error_response(StatusCode::NOT_FOUND, "Not found")
            }
            Self::InvalidId { resource, value } => {
                tracing::debug!(resource = %resource, value = %value, "Invalid ID in request path");

                error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Invalid {} ID", resource),
                )
            }
            Self::InvalidBody(reason) => {
                tracing::debug!("Invalid request body: {}", reason);

                error_response(StatusCode::BAD_REQUEST, "Invalid update data")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
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
