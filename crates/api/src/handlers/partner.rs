//! Handlers for the `/partners` resource (`entidades`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::partner::{Partner, PartnerInput};
use rpm_db::repositories::PartnerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Partner",
        id,
    })
}

/// POST /api/v1/partners
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<PartnerInput>,
) -> AppResult<Json<Partner>> {
    validate_request(&input)?;
    Ok(Json(PartnerRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/partners
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Partner>>> {
    Ok(Json(PartnerRepo::list(&state.pool).await?))
}

/// GET /api/v1/partners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Partner>> {
    let partner = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(partner))
}

/// PUT /api/v1/partners/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<PartnerInput>,
) -> AppResult<Json<Partner>> {
    validate_request(&input)?;
    let partner = PartnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(partner))
}

/// DELETE /api/v1/partners/{id}
///
/// A partner still funding a resource cannot be deleted (409 `FK_VIOLATION`).
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PartnerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
