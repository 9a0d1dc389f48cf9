//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::task::{CreateTask, Task, UpdateTask};
use rpm_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateTask>,
) -> AppResult<Json<Task>> {
    validate_request(&input)?;
    Ok(Json(TaskRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(TaskRepo::list(&state.pool).await?))
}

/// GET /api/v1/activities/{id}/tasks
pub async fn list_by_activity(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(actividad_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(TaskRepo::list_by_activity(&state.pool, actividad_id).await?))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// `actividadId` is part of the body, so a task can move between activities.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    validate_request(&input)?;
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
