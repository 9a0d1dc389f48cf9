//! Handlers for the `/activities` resource.
//!
//! Every activity leaves here as an [`ActivityResponse`], which carries the
//! derived `valorTotal`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::budget::validate_per_year_amounts;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::activity::{Activity, ActivityResponse, CreateActivity, UpdateActivity};
use rpm_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Activity",
        id,
    })
}

fn respond_many(activities: Vec<Activity>) -> Json<Vec<ActivityResponse>> {
    Json(activities.into_iter().map(ActivityResponse::from).collect())
}

/// POST /api/v1/activities
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateActivity>,
) -> AppResult<Json<ActivityResponse>> {
    validate_request(&input)?;
    validate_per_year_amounts(&input.totales_por_anio)?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;
    Ok(Json(activity.into()))
}

/// GET /api/v1/activities
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ActivityResponse>>> {
    Ok(respond_many(ActivityRepo::list(&state.pool).await?))
}

/// GET /api/v1/value-chains/{id}/activities
pub async fn list_by_value_chain(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(cadena_de_valor_id): Path<DbId>,
) -> AppResult<Json<Vec<ActivityResponse>>> {
    let activities = ActivityRepo::list_by_value_chain(&state.pool, cadena_de_valor_id).await?;
    Ok(respond_many(activities))
}

/// GET /api/v1/partners/{id}/activities
///
/// Activities the partner contributes to.
pub async fn list_by_partner(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(entidad_id): Path<DbId>,
) -> AppResult<Json<Vec<ActivityResponse>>> {
    let activities = ActivityRepo::list_by_partner(&state.pool, entidad_id).await?;
    Ok(respond_many(activities))
}

/// GET /api/v1/activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityResponse>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(activity.into()))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<Json<ActivityResponse>> {
    validate_request(&input)?;
    validate_per_year_amounts(&input.totales_por_anio)?;
    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(activity.into()))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ActivityRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
