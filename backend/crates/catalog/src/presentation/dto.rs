//! Data Transfer Objects
//!
//! Wire shapes for the catalog API. Field names follow the established
//! client vocabulary (`nombre`, `sigla`, `esCapital`, `idPais`).

use serde::{Deserialize, Serialize};

use crate::application::config::{DEFAULT_ORDERING, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::entities::{CiudadRecord, PaisRecord};
use crate::domain::page::PageRequest;

/// List query parameters, all optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub filter: Option<String>,
    pub order_by: Option<String>,
    pub page_size: Option<usize>,
    pub page_number: Option<usize>,
}

impl ListParams {
    /// Apply defaults and clamp page inputs to at least 1
    pub fn into_page_request(self) -> PageRequest {
        PageRequest {
            filter: self.filter.unwrap_or_default(),
            order_by: self
                .order_by
                .unwrap_or_else(|| DEFAULT_ORDERING.to_string()),
            page_number: self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        }
    }
}

/// `Pagination` response header payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationHeader {
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Country write payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaisDto {
    pub nombre: Option<String>,
    pub sigla: Option<String>,
}

/// City write payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiudadDto {
    pub nombre: Option<String>,
    #[serde(default)]
    pub es_capital: bool,
    pub id_pais: Option<i64>,
}

/// Country list row: derived capital name, no embedded cities
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaisListDto {
    pub id: i64,
    pub nombre: String,
    pub sigla: Option<String>,
    pub capital: Option<String>,
}

impl From<&PaisRecord> for PaisListDto {
    fn from(record: &PaisRecord) -> Self {
        Self {
            id: record.pais.id.value(),
            nombre: record.pais.nombre.clone(),
            sigla: record.pais.sigla.clone(),
            capital: record.capital().map(str::to_string),
        }
    }
}

/// City entry embedded in a country detail
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CiudadEmbedDto {
    pub id: i64,
    pub nombre: String,
    pub es_capital: bool,
}

/// Country detail: capital plus the owned city list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaisDetailDto {
    pub id: i64,
    pub nombre: String,
    pub sigla: Option<String>,
    pub capital: Option<String>,
    pub ciudades: Vec<CiudadEmbedDto>,
}

impl From<&PaisRecord> for PaisDetailDto {
    fn from(record: &PaisRecord) -> Self {
        Self {
            id: record.pais.id.value(),
            nombre: record.pais.nombre.clone(),
            sigla: record.pais.sigla.clone(),
            capital: record.capital().map(str::to_string),
            ciudades: record
                .ciudades
                .iter()
                .map(|c| CiudadEmbedDto {
                    id: c.id.value(),
                    nombre: c.nombre.clone(),
                    es_capital: c.es_capital,
                })
                .collect(),
        }
    }
}

/// City row: the city with its owning country's name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CiudadListDto {
    pub id: i64,
    pub nombre: String,
    pub es_capital: bool,
    pub id_pais: i64,
    pub pais: String,
}

impl From<&CiudadRecord> for CiudadListDto {
    fn from(record: &CiudadRecord) -> Self {
        Self {
            id: record.ciudad.id.value(),
            nombre: record.ciudad.nombre.clone(),
            es_capital: record.ciudad.es_capital,
            id_pais: record.ciudad.id_pais.value(),
            pais: record.pais_nombre.clone(),
        }
    }
}
