//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Ciudad, CiudadRecord, Pais, PaisRecord};
use crate::error::CatalogResult;
use kernel::id::{CiudadId, PaisId};

/// New-city input for the repository layer
#[derive(Debug, Clone)]
pub struct NuevaCiudad {
    pub nombre: String,
    pub es_capital: bool,
    pub id_pais: PaisId,
}

/// Country repository trait
#[trait_variant::make(PaisRepository: Send)]
pub trait LocalPaisRepository {
    /// All countries with their owned cities (id order)
    async fn list(&self) -> CatalogResult<Vec<PaisRecord>>;

    /// One country with its owned cities
    async fn find(&self, id: PaisId) -> CatalogResult<Option<PaisRecord>>;

    /// Whether a country id exists (referential pre-check for cities)
    async fn exists(&self, id: PaisId) -> CatalogResult<bool>;

    /// Insert a new country, returning it with its assigned id
    async fn insert(&self, nombre: &str, sigla: Option<&str>) -> CatalogResult<Pais>;

    /// Update an existing country
    async fn update(&self, pais: &Pais) -> CatalogResult<()>;

    /// Delete a country; callers must have verified it owns no cities
    async fn delete(&self, id: PaisId) -> CatalogResult<()>;

    /// Number of cities owned by a country
    async fn ciudad_count(&self, id: PaisId) -> CatalogResult<i64>;
}

/// City repository trait
///
/// The single-capital invariant lives at this seam: when an insert or
/// update carries `es_capital = true`, the implementation demotes every
/// existing city of the same country and performs the write in one
/// atomic unit. Clear-all-then-set-one ordering, never the reverse.
#[trait_variant::make(CiudadRepository: Send)]
pub trait LocalCiudadRepository {
    /// All cities joined with their owning country's name (id order)
    async fn list(&self) -> CatalogResult<Vec<CiudadRecord>>;

    /// One city joined with its owning country's name
    async fn find(&self, id: CiudadId) -> CatalogResult<Option<CiudadRecord>>;

    /// Insert a new city, demoting siblings first when it is a capital
    async fn insert(&self, nueva: &NuevaCiudad) -> CatalogResult<Ciudad>;

    /// Update an existing city, demoting siblings first when it is a
    /// capital
    async fn update(&self, ciudad: &Ciudad) -> CatalogResult<()>;

    /// Delete a city
    async fn delete(&self, id: CiudadId) -> CatalogResult<()>;
}
