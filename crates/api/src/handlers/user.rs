//! Handlers for the `/users` resource. Administrador only.
//!
//! Accounts created here are local accounts with an admin-chosen password.
//! Self-service sign-up lives in [`super::auth`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::roles::PROVIDER_LOCAL;
use rpm_core::types::DbId;
use rpm_core::validation::{validate_request, MIN_PASSWORD_LENGTH};
use rpm_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use rpm_db::repositories::{RoleRepo, SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
    pub role_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

async fn respond(state: &AppState, user: User) -> AppResult<UserResponse> {
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(UserResponse::from_user(user, role))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_request(&input)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email.trim().to_lowercase(),
            password_hash,
            google_id: None,
            profile_picture_url: None,
            provider: PROVIDER_LOCAL.to_string(),
            role_id: input.role_id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, admin_id = admin.user_id, "User created by admin");
    Ok(Json(respond(&state, user).await?))
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let roles = RoleRepo::list(&state.pool).await?;

    let responses = users
        .into_iter()
        .map(|user| {
            let role = roles
                .iter()
                .find(|r| r.id == user.role_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "unknown".to_string());
            UserResponse::from_user(user, role)
        })
        .collect();
    Ok(Json(responses))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(respond(&state, user).await?))
}

/// PUT /api/v1/users/{id}
///
/// Deactivating a user also revokes their sessions.
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "firstName and lastName are required".into(),
        )));
    }
    input.email = input.email.trim().to_lowercase();

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !user.is_active {
        SessionRepo::revoke_all_for_user(&state.pool, user.id).await?;
    }
    Ok(Json(respond(&state, user).await?))
}

/// DELETE /api/v1/users/{id}
///
/// Admins cannot delete their own account.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if admin.user_id == id {
        return Err(AppError::BadRequest("Cannot delete your own account".into()));
    }
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
