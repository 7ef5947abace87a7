//! Country Orchestration Service
//!
//! List/detail/create/update/delete over countries, between the HTTP
//! boundary and the repository.

use std::sync::Arc;

use crate::domain::entities::{Pais, PaisRecord};
use crate::domain::page::{PageRequest, PageResult};
use crate::domain::query::{filter_paises, paginate, parse_pais_sort, sort_paises};
use crate::domain::repository::PaisRepository;
use crate::error::{CatalogError, CatalogResult};
use kernel::id::PaisId;

/// Country create/update input
#[derive(Debug, Clone)]
pub struct PaisInput {
    pub nombre: Option<String>,
    pub sigla: Option<String>,
}

impl PaisInput {
    /// Validate the required name field
    fn nombre(&self) -> CatalogResult<&str> {
        match self.nombre.as_deref() {
            Some(nombre) if !nombre.trim().is_empty() => Ok(nombre),
            _ => Err(CatalogError::MissingField("nombre")),
        }
    }
}

/// Country service
pub struct PaisService<R>
where
    R: PaisRepository,
{
    repo: Arc<R>,
}

impl<R> PaisService<R>
where
    R: PaisRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List countries: filter, sort, paginate
    pub async fn list(&self, request: &PageRequest) -> CatalogResult<PageResult<PaisRecord>> {
        let sort = parse_pais_sort(&request.order_by)?;

        let records = self.repo.list().await?;
        let records = filter_paises(records, &request.filter);
        let records = sort_paises(records, sort);

        Ok(paginate(records, request.page_number, request.page_size))
    }

    /// One country with its cities
    pub async fn detail(&self, id: PaisId) -> CatalogResult<PaisRecord> {
        self.repo
            .find(id)
            .await?
            .ok_or(CatalogError::PaisNotFound)
    }

    /// Create a country
    pub async fn create(&self, input: &PaisInput) -> CatalogResult<PaisRecord> {
        let nombre = input.nombre()?;

        let pais = self.repo.insert(nombre, input.sigla.as_deref()).await?;

        tracing::info!(id = %pais.id, nombre = %pais.nombre, "Created pais");

        // A new country owns no cities yet
        Ok(PaisRecord {
            pais,
            ciudades: Vec::new(),
        })
    }

    /// Update a country
    pub async fn update(&self, id: PaisId, input: &PaisInput) -> CatalogResult<()> {
        let existing = self
            .repo
            .find(id)
            .await?
            .ok_or(CatalogError::PaisNotFound)?;

        let nombre = input.nombre()?;

        let pais = Pais {
            id: existing.pais.id,
            nombre: nombre.to_string(),
            sigla: input.sigla.clone(),
        };

        self.repo.update(&pais).await
    }

    /// Delete a country; rejected while it still owns cities
    pub async fn delete(&self, id: PaisId) -> CatalogResult<()> {
        if self.repo.find(id).await?.is_none() {
            return Err(CatalogError::PaisNotFound);
        }

        if self.repo.ciudad_count(id).await? > 0 {
            return Err(CatalogError::HasCiudades);
        }

        self.repo.delete(id).await?;

        tracing::info!(id = %id, "Deleted pais");

        Ok(())
    }
}
