//! Handlers for the `/activity-partners` resource (`act_x_entidades`).
//!
//! Responses carry the derived `totalContribucion`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_db::models::activity_partner::{
    ActivityPartnerResponse, CreateActivityPartner, UpdateActivityPartner,
};
use rpm_db::repositories::ActivityPartnerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ActivityPartner",
        id,
    })
}

/// POST /api/v1/activity-partners
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateActivityPartner>,
) -> AppResult<Json<ActivityPartnerResponse>> {
    let contribution = ActivityPartnerRepo::create(&state.pool, &input).await?;
    Ok(Json(contribution.into()))
}

/// GET /api/v1/activity-partners
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ActivityPartnerResponse>>> {
    let rows = ActivityPartnerRepo::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/activities/{id}/partners
pub async fn list_by_activity(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(actividad_id): Path<DbId>,
) -> AppResult<Json<Vec<ActivityPartnerResponse>>> {
    let rows = ActivityPartnerRepo::list_by_activity(&state.pool, actividad_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/activity-partners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityPartnerResponse>> {
    let contribution = ActivityPartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(contribution.into()))
}

/// PUT /api/v1/activity-partners/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivityPartner>,
) -> AppResult<Json<ActivityPartnerResponse>> {
    let contribution = ActivityPartnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(contribution.into()))
}

/// DELETE /api/v1/activity-partners/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ActivityPartnerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
