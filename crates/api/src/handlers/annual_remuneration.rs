//! Handlers for the `/annual-remunerations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_db::models::annual_remuneration::{AnnualRemuneration, AnnualRemunerationInput};
use rpm_db::repositories::AnnualRemunerationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "AnnualRemuneration",
        id,
    })
}

/// POST /api/v1/annual-remunerations
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<AnnualRemunerationInput>,
) -> AppResult<Json<AnnualRemuneration>> {
    Ok(Json(AnnualRemunerationRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/annual-remunerations
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<AnnualRemuneration>>> {
    Ok(Json(AnnualRemunerationRepo::list(&state.pool).await?))
}

/// GET /api/v1/talent/{talento_humano_id}/remunerations
pub async fn list_by_talent(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(talento_humano_id): Path<DbId>,
) -> AppResult<Json<Vec<AnnualRemuneration>>> {
    let rows = AnnualRemunerationRepo::list_by_talent(&state.pool, talento_humano_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/annual-remunerations/year/{anio}
pub async fn list_by_year(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(anio): Path<i32>,
) -> AppResult<Json<Vec<AnnualRemuneration>>> {
    Ok(Json(AnnualRemunerationRepo::list_by_year(&state.pool, anio).await?))
}

/// GET /api/v1/annual-remunerations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AnnualRemuneration>> {
    let row = AnnualRemunerationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PUT /api/v1/annual-remunerations/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AnnualRemunerationInput>,
) -> AppResult<Json<AnnualRemuneration>> {
    let row = AnnualRemunerationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/annual-remunerations/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AnnualRemunerationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
