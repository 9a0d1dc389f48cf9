//! Handlers for the `/talent-tasks` resource (`talento_humano_tareas`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_db::models::talent_task::{CreateTalentTask, TalentTask, UpdateTalentTask};
use rpm_db::repositories::TalentTaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TalentTask",
        id,
    })
}

/// POST /api/v1/talent-tasks
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateTalentTask>,
) -> AppResult<Json<TalentTask>> {
    Ok(Json(TalentTaskRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/talent-tasks
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<TalentTask>>> {
    Ok(Json(TalentTaskRepo::list(&state.pool).await?))
}

/// GET /api/v1/talent/{talento_humano_id}/tasks
pub async fn list_by_talent(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(talento_humano_id): Path<DbId>,
) -> AppResult<Json<Vec<TalentTask>>> {
    Ok(Json(TalentTaskRepo::list_by_talent(&state.pool, talento_humano_id).await?))
}

/// GET /api/v1/tasks/{id}/talent-tasks
pub async fn list_by_task(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tarea_id): Path<DbId>,
) -> AppResult<Json<Vec<TalentTask>>> {
    Ok(Json(TalentTaskRepo::list_by_task(&state.pool, tarea_id).await?))
}

/// GET /api/v1/talent-tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TalentTask>> {
    let assignment = TalentTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// PUT /api/v1/talent-tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTalentTask>,
) -> AppResult<Json<TalentTask>> {
    let assignment = TalentTaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// DELETE /api/v1/talent-tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TalentTaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
