//! Handlers for the `/contracts` resource (`contrataciones`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_db::models::contract::{Contract, ContractInput};
use rpm_db::repositories::ContractRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contract",
        id,
    })
}

/// POST /api/v1/contracts
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<ContractInput>,
) -> AppResult<Json<Contract>> {
    Ok(Json(ContractRepo::create(&state.pool, &input).await?))
}

/// GET /api/v1/contracts
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Contract>>> {
    Ok(Json(ContractRepo::list(&state.pool).await?))
}

/// GET /api/v1/contracts/category/{categoria}
pub async fn list_by_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(categoria): Path<String>,
) -> AppResult<Json<Vec<Contract>>> {
    Ok(Json(ContractRepo::list_by_category(&state.pool, &categoria).await?))
}

/// GET /api/v1/contracts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(contract))
}

/// PUT /api/v1/contracts/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ContractInput>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(contract))
}

/// DELETE /api/v1/contracts/{id}
///
/// Contracts referenced by a human-talent resource are kept (409).
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContractRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
