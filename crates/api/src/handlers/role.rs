//! Handlers for the `/roles` resource. Administrador only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::validate_request;
use rpm_db::models::role::{AssignRole, CreateRole, Role, UpdateRole};
use rpm_db::models::user::UserResponse;
use rpm_db::repositories::{RoleRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Role", id })
}

/// POST /api/v1/roles
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateRole>,
) -> AppResult<Json<Role>> {
    validate_request(&input)?;
    let role = RoleRepo::create(&state.pool, &input).await?;
    tracing::info!(role_id = role.id, name = %role.name, admin_id = admin.user_id, "Role created");
    Ok(Json(role))
}

/// GET /api/v1/roles
pub async fn list(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<Vec<Role>>> {
    Ok(Json(RoleRepo::list(&state.pool).await?))
}

/// GET /api/v1/roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Role>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(role))
}

/// GET /api/v1/roles/name/{name}
///
/// An unknown name is a 404.
pub async fn get_by_name(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(name): Path<String>,
) -> AppResult<Json<Role>> {
    let role = RoleRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    Ok(Json(role))
}

/// PUT /api/v1/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRole>,
) -> AppResult<Json<Role>> {
    validate_request(&input)?;
    let role = RoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(role))
}

/// DELETE /api/v1/roles/{id}
///
/// A role that still has users cannot be deleted (409 `FK_VIOLATION`).
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RoleRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/roles/{id}/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let users = UserRepo::list_by_role(&state.pool, id).await?;
    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse::from_user(u, role.name.clone()))
            .collect(),
    ))
}

/// POST /api/v1/roles/assign
///
/// Moves a user to another role. Takes effect on the user's next token.
pub async fn assign(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<AssignRole>,
) -> AppResult<Json<UserResponse>> {
    let role = RoleRepo::find_by_id(&state.pool, input.role_id)
        .await?
        .ok_or_else(|| not_found(input.role_id))?;
    let user = UserRepo::assign_role(&state.pool, input.user_id, input.role_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    tracing::info!(
        user_id = user.id,
        role = %role.name,
        admin_id = admin.user_id,
        "Role assigned"
    );
    Ok(Json(UserResponse::from_user(user, role.name)))
}
