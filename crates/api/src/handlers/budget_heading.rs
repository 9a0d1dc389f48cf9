//! Handlers for the `/budget-headings` resource (`rubros`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::budget_heading::{BudgetHeading, BudgetHeadingInput};
use rpm_db::repositories::BudgetHeadingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BudgetHeading",
        id,
    })
}

/// POST /api/v1/budget-headings
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<BudgetHeadingInput>,
) -> AppResult<Json<BudgetHeading>> {
    validate_request(&input)?;
    Ok(Json(BudgetHeadingRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/budget-headings
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<BudgetHeading>>> {
    Ok(Json(BudgetHeadingRepo::list(&state.pool).await?))
}

/// GET /api/v1/budget-headings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetHeading>> {
    let heading = BudgetHeadingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(heading))
}

/// PUT /api/v1/budget-headings/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<BudgetHeadingInput>,
) -> AppResult<Json<BudgetHeading>> {
    validate_request(&input)?;
    let heading = BudgetHeadingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(heading))
}

/// DELETE /api/v1/budget-headings/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BudgetHeadingRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
