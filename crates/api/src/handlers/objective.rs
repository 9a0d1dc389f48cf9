//! Handlers for the `/objectives` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::objective::{CreateObjective, Objective, UpdateObjective};
use rpm_db::repositories::ObjectiveRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Objective",
        id,
    })
}

/// POST /api/v1/objectives
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateObjective>,
) -> AppResult<Json<Objective>> {
    validate_request(&input)?;
    let objective = ObjectiveRepo::create(&state.pool, &input).await?;
    Ok(Json(objective))
}

/// GET /api/v1/objectives
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Objective>>> {
    Ok(Json(ObjectiveRepo::list(&state.pool).await?))
}

/// GET /api/v1/projects/{id}/objectives
pub async fn list_by_project(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(proyecto_id): Path<DbId>,
) -> AppResult<Json<Vec<Objective>>> {
    let objectives = ObjectiveRepo::list_by_project(&state.pool, proyecto_id).await?;
    Ok(Json(objectives))
}

/// GET /api/v1/objectives/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Objective>> {
    let objective = ObjectiveRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(objective))
}

/// PUT /api/v1/objectives/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateObjective>,
) -> AppResult<Json<Objective>> {
    validate_request(&input)?;
    let objective = ObjectiveRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(objective))
}

/// DELETE /api/v1/objectives/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ObjectiveRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
