//! City Orchestration Service
//!
//! List/detail/create/update/delete over cities. Create and update
//! verify the referenced country before any write; capital designation
//! is delegated to the repository's atomic demote-and-write operations.

use std::sync::Arc;

use crate::domain::entities::{Ciudad, CiudadRecord};
use crate::domain::page::{PageRequest, PageResult};
use crate::domain::query::{filter_ciudades, paginate, parse_ciudad_sort, sort_ciudades};
use crate::domain::repository::{CiudadRepository, NuevaCiudad, PaisRepository};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::{CiudadId, PaisId};

/// City create/update input
#[derive(Debug, Clone)]
pub struct CiudadInput {
    pub nombre: Option<String>,
    pub id_pais: Option<i64>,
    pub es_capital: bool,
}

impl CiudadInput {
    fn nombre(&self) -> CatalogResult<&str> {
        match self.nombre.as_deref() {
            Some(nombre) if !nombre.trim().is_empty() => Ok(nombre),
            _ => Err(CatalogError::MissingField("nombre")),
        }
    }

    fn id_pais(&self) -> CatalogResult<PaisId> {
        self.id_pais
            .map(PaisId::new)
            .ok_or(CatalogError::MissingField("idPais"))
    }
}

/// City service
pub struct CiudadService<C, P>
where
    C: CiudadRepository,
    P: PaisRepository,
{
    ciudades: Arc<C>,
    paises: Arc<P>,
}

impl<C, P> CiudadService<C, P>
where
    C: CiudadRepository,
    P: PaisRepository,
{
    pub fn new(ciudades: Arc<C>, paises: Arc<P>) -> Self {
        Self { ciudades, paises }
    }

    /// List cities: filter, sort, paginate
    pub async fn list(&self, request: &PageRequest) -> CatalogResult<PageResult<CiudadRecord>> {
        let sort = parse_ciudad_sort(&request.order_by)?;

        let records = self.ciudades.list().await?;
        let records = filter_ciudades(records, &request.filter);
        let records = sort_ciudades(records, sort);

        Ok(paginate(records, request.page_number, request.page_size))
    }

    /// One city with its owning country's name
    pub async fn detail(&self, id: CiudadId) -> CatalogResult<CiudadRecord> {
        self.ciudades
            .find(id)
            .await?
            .ok_or(CatalogError::CiudadNotFound)
    }

    /// Create a city
    ///
    /// The referenced country must exist before any write happens.
    pub async fn create(&self, input: &CiudadInput) -> CatalogResult<CiudadRecord> {
        let nombre = input.nombre()?;
        let id_pais = input.id_pais()?;

        if !self.paises.exists(id_pais).await? {
            return Err(CatalogError::PaisMissing(id_pais.value()));
        }

        let nueva = NuevaCiudad {
            nombre: nombre.to_string(),
            es_capital: input.es_capital,
            id_pais,
        };

        let ciudad = self.ciudades.insert(&nueva).await?;

        if ciudad.es_capital {
            tracing::info!(id = %ciudad.id, id_pais = %id_pais, "Designated capital");
        }

        self.ciudades.find(ciudad.id).await?.ok_or_else(|| {
            CatalogError::Internal(format!("ciudad {} missing after insert", ciudad.id))
        })
    }

    /// Update a city
    pub async fn update(&self, id: CiudadId, input: &CiudadInput) -> CatalogResult<()> {
        let existing = self
            .ciudades
            .find(id)
            .await?
            .ok_or(CatalogError::CiudadNotFound)?;

        let nombre = input.nombre()?;
        let id_pais = input.id_pais()?;

        if !self.paises.exists(id_pais).await? {
            return Err(CatalogError::PaisMissing(id_pais.value()));
        }

        let ciudad = Ciudad {
            id: existing.ciudad.id,
            nombre: nombre.to_string(),
            es_capital: input.es_capital,
            id_pais,
        };

        self.ciudades.update(&ciudad).await?;

        if ciudad.es_capital {
            tracing::info!(id = %ciudad.id, id_pais = %id_pais, "Designated capital");
        }

        Ok(())
    }

    /// Delete a city
    pub async fn delete(&self, id: CiudadId) -> CatalogResult<()> {
        if self.ciudades.find(id).await?.is_none() {
            return Err(CatalogError::CiudadNotFound);
        }

        self.ciudades.delete(id).await?;

        tracing::info!(id = %id, "Deleted ciudad");

        Ok(())
    }
}
