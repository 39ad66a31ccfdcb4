//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Route parameter is not a valid product identifier
    #[error("Invalid product id")]
    InvalidId,

    /// No product with the given identifier
    #[error("Product not found")]
    ProductNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) | CatalogError::InvalidId => StatusCode::BAD_REQUEST,
            CatalogError::ProductNotFound => StatusCode::NOT_FOUND,
            CatalogError::Database(e) => {
                StatusCode::from_u16(db_kind(e).status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) | CatalogError::InvalidId => ErrorKind::BadRequest,
            CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::Database(e) => db_kind(e),
        }
    }

    /// Convert to AppError, hiding server-side causes from clients
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Database(e) => AppError::new(db_kind(e), "Server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

/// Classify a sqlx error: connection-level failures are 503, the rest 500
fn db_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::InternalServerError,
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CatalogError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CatalogError::ProductNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_database_errors_do_not_leak_cause() {
        let err = CatalogError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_app_error().message(), "Server error");
    }
}
