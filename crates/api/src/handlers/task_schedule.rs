//! Handlers for the `/task-schedules` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::{DbId, Timestamp};
use rpm_db::models::task_schedule::{CreateTaskSchedule, TaskSchedule, UpdateTaskSchedule};
use rpm_db::repositories::TaskScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TaskSchedule",
        id,
    })
}

fn check_window(inicio: Timestamp, fin: Timestamp, meses: i32, dias: i32) -> Result<(), CoreError> {
    if fin < inicio {
        return Err(CoreError::Validation(
            "fechaFin must not be earlier than fechaInicio".into(),
        ));
    }
    if meses < 0 || dias < 0 {
        return Err(CoreError::Validation(
            "duracionMeses and duracionDias must not be negative".into(),
        ));
    }
    Ok(())
}

/// POST /api/v1/task-schedules
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateTaskSchedule>,
) -> AppResult<Json<TaskSchedule>> {
    check_window(
        input.fecha_inicio,
        input.fecha_fin,
        input.duracion_meses,
        input.duracion_dias,
    )?;
    Ok(Json(TaskScheduleRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/task-schedules
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<TaskSchedule>>> {
    Ok(Json(TaskScheduleRepo::list(&state.pool).await?))
}

/// GET /api/v1/tasks/{id}/schedules
pub async fn list_by_task(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tarea_id): Path<DbId>,
) -> AppResult<Json<Vec<TaskSchedule>>> {
    Ok(Json(TaskScheduleRepo::list_by_task(&state.pool, tarea_id).await?))
}

/// GET /api/v1/task-schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskSchedule>> {
    let schedule = TaskScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(schedule))
}

/// PUT /api/v1/task-schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskSchedule>,
) -> AppResult<Json<TaskSchedule>> {
    check_window(
        input.fecha_inicio,
        input.fecha_fin,
        input.duracion_meses,
        input.duracion_dias,
    )?;
    let schedule = TaskScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(schedule))
}

/// DELETE /api/v1/task-schedules/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TaskScheduleRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
