//! Handlers for the `/value-chains` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::value_chain::{CreateValueChain, UpdateValueChain, ValueChain};
use rpm_db::repositories::ValueChainRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ValueChain",
        id,
    })
}

/// POST /api/v1/value-chains
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateValueChain>,
) -> AppResult<Json<ValueChain>> {
    validate_request(&input)?;
    let chain = ValueChainRepo::create(&state.pool, &input).await?;
    Ok(Json(chain))
}

/// GET /api/v1/value-chains
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ValueChain>>> {
    Ok(Json(ValueChainRepo::list(&state.pool).await?))
}

/// GET /api/v1/objectives/{id}/value-chains
pub async fn list_by_objective(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(objetivo_id): Path<DbId>,
) -> AppResult<Json<Vec<ValueChain>>> {
    let chains = ValueChainRepo::list_by_objective(&state.pool, objetivo_id).await?;
    Ok(Json(chains))
}

/// GET /api/v1/value-chains/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ValueChain>> {
    let chain = ValueChainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(chain))
}

/// PUT /api/v1/value-chains/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateValueChain>,
) -> AppResult<Json<ValueChain>> {
    validate_request(&input)?;
    let chain = ValueChainRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(chain))
}

/// DELETE /api/v1/value-chains/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ValueChainRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
