//! Catalog Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::domain::repository::{CiudadRepository, PaisRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/paises",
            get(handlers::list_paises::<R>).post(handlers::create_pais::<R>),
        )
        .route(
            "/paises/{id}",
            get(handlers::get_pais::<R>)
                .put(handlers::update_pais::<R>)
                .delete(handlers::delete_pais::<R>),
        )
        .route(
            "/ciudades",
            get(handlers::list_ciudades::<R>).post(handlers::create_ciudad::<R>),
        )
        .route(
            "/ciudades/{id}",
            get(handlers::get_ciudad::<R>)
                .put(handlers::update_ciudad::<R>)
                .delete(handlers::delete_ciudad::<R>),
        )
        .with_state(state)
}
