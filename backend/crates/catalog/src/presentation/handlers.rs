//! HTTP Handlers
//!
//! List responses carry page metadata out of band: a `Pagination`
//! response header with the page JSON, plus
//! `Access-Control-Expose-Headers` so browsers may read it.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use std::sync::Arc;

use crate::application::{CiudadInput, CiudadService, PaisInput, PaisService};
use crate::domain::page::PageResult;
use crate::domain::repository::{CiudadRepository, PaisRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CiudadDto, CiudadListDto, ListParams, PaginationHeader, PaisDetailDto, PaisDto, PaisListDto,
};
use kernel::id::{CiudadId, PaisId};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn pagination_headers<T>(page: &PageResult<T>) -> CatalogResult<HeaderMap> {
    let payload = serde_json::to_string(&PaginationHeader {
        page_number: page.page_number,
        page_size: page.page_size,
        total_pages: page.total_pages,
        total_count: page.total_count,
    })
    .map_err(|e| CatalogError::Internal(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        "Pagination",
        HeaderValue::from_str(&payload)
            .map_err(|e| CatalogError::Internal(e.to_string()))?,
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("Pagination"),
    );

    Ok(headers)
}

/// GET /api/paises
pub async fn list_paises<R>(
    State(state): State<CatalogAppState<R>>,
    Query(params): Query<ListParams>,
) -> CatalogResult<(HeaderMap, Json<Vec<PaisListDto>>)>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = PaisService::new(state.repo.clone());

    let page = service.list(&params.into_page_request()).await?;
    let headers = pagination_headers(&page)?;
    let body: Vec<PaisListDto> = page.items.iter().map(PaisListDto::from).collect();

    Ok((headers, Json(body)))
}

/// GET /api/paises/{id}
pub async fn get_pais<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
) -> CatalogResult<Json<PaisDetailDto>>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = PaisService::new(state.repo.clone());

    let record = service.detail(PaisId::new(id)).await?;

    Ok(Json(PaisDetailDto::from(&record)))
}

/// POST /api/paises
pub async fn create_pais<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<PaisDto>,
) -> CatalogResult<(StatusCode, [(header::HeaderName, String); 1], Json<PaisDetailDto>)>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = PaisService::new(state.repo.clone());

    let input = PaisInput {
        nombre: req.nombre,
        sigla: req.sigla,
    };

    let record = service.create(&input).await?;
    let location = format!("/api/paises/{}", record.pais.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PaisDetailDto::from(&record)),
    ))
}

/// PUT /api/paises/{id}
pub async fn update_pais<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<PaisDto>,
) -> CatalogResult<StatusCode>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = PaisService::new(state.repo.clone());

    let input = PaisInput {
        nombre: req.nombre,
        sigla: req.sigla,
    };

    service.update(PaisId::new(id), &input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/paises/{id}
pub async fn delete_pais<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
) -> CatalogResult<StatusCode>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = PaisService::new(state.repo.clone());

    service.delete(PaisId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn ciudad_service<R>(state: &CatalogAppState<R>) -> CiudadService<R, R>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    CiudadService::new(state.repo.clone(), state.repo.clone())
}

/// GET /api/ciudades
pub async fn list_ciudades<R>(
    State(state): State<CatalogAppState<R>>,
    Query(params): Query<ListParams>,
) -> CatalogResult<(HeaderMap, Json<Vec<CiudadListDto>>)>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = ciudad_service(&state);

    let page = service.list(&params.into_page_request()).await?;
    let headers = pagination_headers(&page)?;
    let body: Vec<CiudadListDto> = page.items.iter().map(CiudadListDto::from).collect();

    Ok((headers, Json(body)))
}

/// GET /api/ciudades/{id}
pub async fn get_ciudad<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
) -> CatalogResult<Json<CiudadListDto>>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = ciudad_service(&state);

    let record = service.detail(CiudadId::new(id)).await?;

    Ok(Json(CiudadListDto::from(&record)))
}

/// POST /api/ciudades
pub async fn create_ciudad<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CiudadDto>,
) -> CatalogResult<(StatusCode, [(header::HeaderName, String); 1], Json<CiudadListDto>)>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = ciudad_service(&state);

    let input = CiudadInput {
        nombre: req.nombre,
        id_pais: req.id_pais,
        es_capital: req.es_capital,
    };

    let record = service.create(&input).await?;
    let location = format!("/api/ciudades/{}", record.ciudad.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CiudadListDto::from(&record)),
    ))
}

/// PUT /api/ciudades/{id}
pub async fn update_ciudad<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<CiudadDto>,
) -> CatalogResult<StatusCode>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = ciudad_service(&state);

    let input = CiudadInput {
        nombre: req.nombre,
        id_pais: req.id_pais,
        es_capital: req.es_capital,
    };

    service.update(CiudadId::new(id), &input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/ciudades/{id}
pub async fn delete_ciudad<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
) -> CatalogResult<StatusCode>
where
    R: PaisRepository + CiudadRepository + Clone + Send + Sync + 'static,
{
    let service = ciudad_service(&state);

    service.delete(CiudadId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
