//! Catalog Backend Module - countries ("paises") and cities ("ciudades")
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, list-query pipeline, repository traits
//! - `application/` - Orchestration services per resource
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Paginated, filterable, sortable list queries over both resources
//! - Single-capital invariant: at most one capital city per country
//! - Referential checks before writes, delete-restrict on countries
//!
//! ## Invariant Model
//! - Designating a capital demotes every sibling city of the same
//!   country inside one database transaction
//! - Deleting a country with cities is rejected, never cascaded

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::page::*;
    pub use crate::presentation::dto::*;
}

pub mod query {
    pub use crate::domain::query::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
