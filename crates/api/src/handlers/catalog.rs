//! Handlers for the `/catalog` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::catalog_entry::{CatalogEntry, CreateCatalogEntry, UpdateCatalogEntry};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/catalog
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCatalogEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<CatalogEntry>>)> {
    let entry = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/catalog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CatalogEntry>>>> {
    let entries = state.catalog.get_all().await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/catalog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CatalogEntry>>> {
    let entry = state.catalog.get(id).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/catalog/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCatalogEntry>,
) -> AppResult<Json<DataResponse<CatalogEntry>>> {
    let entry = state.catalog.update(id, input).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/catalog/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
