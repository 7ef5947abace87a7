//! List-Query Pipeline
//!
//! Staged, pure transformations over in-memory record sequences:
//! filter, then sort, then paginate. Each stage's output is the next
//! stage's input; the storage layer is only asked for "all records with
//! their joining data".
//!
//! Filtering is always case-insensitive, substring-based and
//! OR-combined across the listed fields. Sortable columns are closed
//! enumerations per record type, so an unknown column is an explicit
//! request-level error instead of a lookup panic.

use std::cmp::Ordering;

use crate::domain::entities::{CiudadRecord, PaisRecord};
use crate::domain::page::PageResult;
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// Sort specification
// ============================================================================

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a direction token
    ///
    /// Only a case-insensitive `"desc"` selects descending; any other
    /// token (including garbage) collapses to ascending.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Sortable columns of the countries list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaisColumn {
    Id,
    Nombre,
    Sigla,
}

impl PaisColumn {
    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "id" => Some(PaisColumn::Id),
            "nombre" => Some(PaisColumn::Nombre),
            "sigla" => Some(PaisColumn::Sigla),
            _ => None,
        }
    }

    fn compare(self, a: &PaisRecord, b: &PaisRecord) -> Ordering {
        match self {
            PaisColumn::Id => a.pais.id.cmp(&b.pais.id),
            PaisColumn::Nombre => a.pais.nombre.cmp(&b.pais.nombre),
            PaisColumn::Sigla => a.pais.sigla.cmp(&b.pais.sigla),
        }
    }
}

/// Sortable columns of the cities list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiudadColumn {
    Id,
    Nombre,
    EsCapital,
    PaisNombre,
}

impl CiudadColumn {
    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "id" => Some(CiudadColumn::Id),
            "nombre" => Some(CiudadColumn::Nombre),
            "escapital" => Some(CiudadColumn::EsCapital),
            "paisnombre" => Some(CiudadColumn::PaisNombre),
            _ => None,
        }
    }

    fn compare(self, a: &CiudadRecord, b: &CiudadRecord) -> Ordering {
        match self {
            CiudadColumn::Id => a.ciudad.id.cmp(&b.ciudad.id),
            CiudadColumn::Nombre => a.ciudad.nombre.cmp(&b.ciudad.nombre),
            CiudadColumn::EsCapital => a.ciudad.es_capital.cmp(&b.ciudad.es_capital),
            CiudadColumn::PaisNombre => a.pais_nombre.cmp(&b.pais_nombre),
        }
    }
}

/// Parsed `"<column>[:asc|:desc]"` sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

fn parse_sort_spec<C>(
    spec: &str,
    parse_column: impl Fn(&str) -> Option<C>,
) -> CatalogResult<Option<SortSpec<C>>> {
    if spec.is_empty() {
        return Ok(None);
    }

    let mut parts = spec.splitn(2, ':');
    let column_name = parts.next().unwrap_or_default();
    let direction = SortDirection::from_token(parts.next().unwrap_or("asc"));

    let column = parse_column(column_name)
        .ok_or_else(|| CatalogError::UnknownSortColumn(column_name.to_string()))?;

    Ok(Some(SortSpec { column, direction }))
}

/// Parse a countries sort directive; empty spec means "no sorting"
pub fn parse_pais_sort(spec: &str) -> CatalogResult<Option<SortSpec<PaisColumn>>> {
    parse_sort_spec(spec, PaisColumn::parse)
}

/// Parse a cities sort directive; empty spec means "no sorting"
pub fn parse_ciudad_sort(spec: &str) -> CatalogResult<Option<SortSpec<CiudadColumn>>> {
    parse_sort_spec(spec, CiudadColumn::parse)
}

// ============================================================================
// Filter stage
// ============================================================================

/// Filter countries: match on name or short code
pub fn filter_paises(records: Vec<PaisRecord>, filter: &str) -> Vec<PaisRecord> {
    if filter.is_empty() {
        return records;
    }
    let needle = filter.to_lowercase();

    records
        .into_iter()
        .filter(|r| {
            r.pais.nombre.to_lowercase().contains(&needle)
                || r.pais
                    .sigla
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filter cities: match on city name, capital flag as text, or owning
/// country name
pub fn filter_ciudades(records: Vec<CiudadRecord>, filter: &str) -> Vec<CiudadRecord> {
    if filter.is_empty() {
        return records;
    }
    let needle = filter.to_lowercase();

    records
        .into_iter()
        .filter(|r| {
            r.ciudad.nombre.to_lowercase().contains(&needle)
                || r.ciudad.es_capital.to_string() == needle
                || r.pais_nombre.to_lowercase().contains(&needle)
        })
        .collect()
}

// ============================================================================
// Sort stage
// ============================================================================

fn sort_records<T, C: Copy>(
    mut records: Vec<T>,
    spec: Option<SortSpec<C>>,
    compare: impl Fn(C, &T, &T) -> Ordering,
) -> Vec<T> {
    let Some(spec) = spec else {
        return records;
    };

    // Vec::sort_by is stable, so ties keep their incoming order in
    // both directions.
    match spec.direction {
        SortDirection::Ascending => records.sort_by(|a, b| compare(spec.column, a, b)),
        SortDirection::Descending => records.sort_by(|a, b| compare(spec.column, b, a)),
    }
    records
}

/// Sort countries by a parsed directive; `None` means "leave as is"
pub fn sort_paises(records: Vec<PaisRecord>, spec: Option<SortSpec<PaisColumn>>) -> Vec<PaisRecord> {
    sort_records(records, spec, PaisColumn::compare)
}

/// Sort cities by a parsed directive; `None` means "leave as is"
pub fn sort_ciudades(
    records: Vec<CiudadRecord>,
    spec: Option<SortSpec<CiudadColumn>>,
) -> Vec<CiudadRecord> {
    sort_records(records, spec, CiudadColumn::compare)
}

// ============================================================================
// Paginate stage
// ============================================================================

/// Slice a shaped collection into one page with metadata
///
/// `total_count` is the size of the input (after filtering, before
/// slicing); pages past the end yield an empty slice, not an error.
pub fn paginate<T>(records: Vec<T>, page_number: usize, page_size: usize) -> PageResult<T> {
    let total_count = records.len();
    let total_pages = total_count.div_ceil(page_size);

    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let items: Vec<T> = records.into_iter().skip(start).take(page_size).collect();

    PageResult {
        items,
        page_number,
        page_size,
        total_pages,
        total_count,
    }
}
