//! Places Error Types
//!
//! Place-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::geocoder::GeocodeError;

/// Places-specific result type alias
pub type PlaceResult<T> = Result<T, PlaceError>;

/// Places-specific error variants
#[derive(Debug, Error)]
pub enum PlaceError {
    /// Request input failed validation
    #[error("Invalid inputs passed: {0}")]
    Validation(String),

    /// Place not found
    #[error("Could not find a place for the provided id")]
    PlaceNotFound,

    /// The user whose places were requested does not exist
    #[error("Could not find a user for the provided id")]
    OwnerNotFound,

    /// Authenticated user is not the creator of the place
    #[error("You are not allowed to modify this place")]
    NotOwner,

    /// Missing or invalid bearer token
    #[error("Authentication failed")]
    Unauthenticated,

    /// The geocoder found no coordinates for the address
    #[error("Could not find location for the specified address")]
    GeocodeNoResult,

    /// The geocoding provider failed (network, quota, malformed response)
    #[error("Geocoding failed: {0}")]
    GeocodeProvider(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlaceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlaceError::Validation(_) | PlaceError::GeocodeNoResult => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PlaceError::PlaceNotFound | PlaceError::OwnerNotFound => StatusCode::NOT_FOUND,
            PlaceError::NotOwner | PlaceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            PlaceError::GeocodeProvider(_) | PlaceError::Database(_) | PlaceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlaceError::Validation(_) | PlaceError::GeocodeNoResult => {
                ErrorKind::UnprocessableEntity
            }
            PlaceError::PlaceNotFound | PlaceError::OwnerNotFound => ErrorKind::NotFound,
            PlaceError::NotOwner | PlaceError::Unauthenticated => ErrorKind::Unauthorized,
            PlaceError::GeocodeProvider(_) | PlaceError::Database(_) | PlaceError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PlaceError::Database(e) => {
                tracing::error!(error = %e, "Places database error");
            }
            PlaceError::GeocodeProvider(msg) => {
                tracing::error!(message = %msg, "Geocoding provider failed");
            }
            PlaceError::Internal(msg) => {
                tracing::error!(message = %msg, "Places internal error");
            }
            PlaceError::NotOwner => {
                tracing::warn!("Rejected modification by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Places error");
            }
        }
    }
}

impl From<GeocodeError> for PlaceError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NoResult => PlaceError::GeocodeNoResult,
            GeocodeError::Provider(msg) => PlaceError::GeocodeProvider(msg),
        }
    }
}

impl From<PlaceError> for AppError {
    fn from(err: PlaceError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for PlaceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PlaceError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                PlaceError::Validation(err.message().to_string())
            }
            _ => PlaceError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PlaceError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            PlaceError::GeocodeNoResult.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            PlaceError::PlaceNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PlaceError::OwnerNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(PlaceError::NotOwner.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            PlaceError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            PlaceError::GeocodeProvider("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_geocode_error_mapping() {
        assert!(matches!(
            PlaceError::from(GeocodeError::NoResult),
            PlaceError::GeocodeNoResult
        ));
        assert!(matches!(
            PlaceError::from(GeocodeError::Provider("timeout".into())),
            PlaceError::GeocodeProvider(_)
        ));
    }
}
