//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Client-facing messages are in the Spanish the API has always spoken;
//! server-side diagnostics stay in English.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Country id not found
    #[error("Pais not found")]
    PaisNotFound,

    /// City id not found
    #[error("Ciudad not found")]
    CiudadNotFound,

    /// A required input field is missing or empty
    #[error("El campo {0} es requerido")]
    MissingField(&'static str),

    /// A city references a country id that does not exist
    #[error("No existe un país con Id {0}")]
    PaisMissing(i64),

    /// Delete blocked: the country still owns cities
    #[error("No se puede eliminar porque tiene ciudades asociadas")]
    HasCiudades,

    /// `orderBy` named a column that is not sortable
    #[error("Columna de ordenamiento desconocida: {0}")]
    UnknownSortColumn(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::PaisNotFound | CatalogError::CiudadNotFound => StatusCode::NOT_FOUND,
            // The API has always mapped these to 400, including the
            // delete-with-dependents case.
            CatalogError::MissingField(_)
            | CatalogError::PaisMissing(_)
            | CatalogError::HasCiudades
            | CatalogError::UnknownSortColumn(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::PaisNotFound | CatalogError::CiudadNotFound => ErrorKind::NotFound,
            CatalogError::MissingField(_)
            | CatalogError::PaisMissing(_)
            | CatalogError::HasCiudades
            | CatalogError::UnknownSortColumn(_) => ErrorKind::BadRequest,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
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
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::HasCiudades => {
                tracing::warn!("Rejected delete of a pais that still owns ciudades");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
