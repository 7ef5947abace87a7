//! Domain Entities
//!
//! Core catalog entities and the read records the list pipeline works
//! on. Records carry the joined data a row needs for filtering,
//! sorting, and display, so later stages stay pure.

use kernel::id::{CiudadId, PaisId};

/// Country entity
#[derive(Debug, Clone)]
pub struct Pais {
    pub id: PaisId,
    pub nombre: String,
    /// Short code, e.g. "PY"
    pub sigla: Option<String>,
}

/// City entity
#[derive(Debug, Clone)]
pub struct Ciudad {
    pub id: CiudadId,
    pub nombre: String,
    pub es_capital: bool,
    /// Owning country (required foreign key)
    pub id_pais: PaisId,
}

/// Country read record: the country with its owned cities
#[derive(Debug, Clone)]
pub struct PaisRecord {
    pub pais: Pais,
    /// Owned cities in id order
    pub ciudades: Vec<Ciudad>,
}

impl PaisRecord {
    /// Derived capital name: the first owned city flagged as capital
    ///
    /// Lookup by predicate, never a stored field.
    pub fn capital(&self) -> Option<&str> {
        self.ciudades
            .iter()
            .find(|c| c.es_capital)
            .map(|c| c.nombre.as_str())
    }
}

/// City read record: the city joined with its owning country's name
#[derive(Debug, Clone)]
pub struct CiudadRecord {
    pub ciudad: Ciudad,
    pub pais_nombre: String,
}
