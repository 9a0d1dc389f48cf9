//! Handlers for the `/resources` resource (`recursos`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_db::models::resource::{CreateResource, Resource, UpdateResource};
use rpm_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Resource",
        id,
    })
}

/// POST /api/v1/resources
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateResource>,
) -> AppResult<Json<Resource>> {
    Ok(Json(ResourceRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/resources
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Resource>>> {
    Ok(Json(ResourceRepo::list(&state.pool).await?))
}

/// GET /api/v1/activities/{id}/resources
pub async fn list_by_activity(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(actividad_id): Path<DbId>,
) -> AppResult<Json<Vec<Resource>>> {
    Ok(Json(ResourceRepo::list_by_activity(&state.pool, actividad_id).await?))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resource))
}

/// PUT /api/v1/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResource>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resource))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ResourceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
