//! Handlers for the `/specific-resources` resource.
//!
//! Bodies carry the kind-specific payload as `"tipo"` plus `"datos"`; a body
//! whose `datos` does not fit its `tipo` is rejected by the JSON extractor
//! before any handler code runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::resource_kind::ResourceKind;
use rpm_core::types::DbId;
use rpm_db::models::specific_resource::{
    CreateSpecificResource, SpecificResource, UpdateSpecificResource,
};
use rpm_db::repositories::SpecificResourceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SpecificResource",
        id,
    })
}

/// POST /api/v1/specific-resources
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateSpecificResource>,
) -> AppResult<Json<SpecificResource>> {
    let resource = SpecificResourceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        recurso_especifico_id = resource.id,
        tipo = %resource.kind(),
        "Specific resource created"
    );
    Ok(Json(resource))
}

/// GET /api/v1/specific-resources
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<SpecificResource>>> {
    Ok(Json(SpecificResourceRepo::list(&state.pool).await?))
}

/// GET /api/v1/specific-resources/kind/{tipo}
///
/// An unknown kind name is a 400.
pub async fn list_by_kind(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tipo): Path<String>,
) -> AppResult<Json<Vec<SpecificResource>>> {
    let kind: ResourceKind = tipo.parse()?;
    Ok(Json(SpecificResourceRepo::list_by_kind(&state.pool, kind).await?))
}

/// GET /api/v1/resources/{id}/specific-resources
pub async fn list_by_resource(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(recurso_id): Path<DbId>,
) -> AppResult<Json<Vec<SpecificResource>>> {
    Ok(Json(
        SpecificResourceRepo::list_by_resource(&state.pool, recurso_id).await?,
    ))
}

/// GET /api/v1/specific-resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SpecificResource>> {
    let resource = SpecificResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resource))
}

/// PUT /api/v1/specific-resources/{id}
///
/// Sending a different `tipo` replaces the payload with one of the new kind.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSpecificResource>,
) -> AppResult<Json<SpecificResource>> {
    let resource = SpecificResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resource))
}

/// DELETE /api/v1/specific-resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SpecificResourceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
