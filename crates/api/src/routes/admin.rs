//! Route definitions for `/roles` and `/users` (Administrador only, except
//! a user's project list).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, role, user};
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// POST   /assign          -> assign
/// GET    /name/{name}     -> get_by_name
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/users      -> list_users
/// ```
pub fn role_router() -> Router<AppState> {
    Router::new()
        .route("/", get(role::list).post(role::create))
        .route("/assign", post(role::assign))
        .route("/name/{name}", get(role::get_by_name))
        .route(
            "/{id}",
            get(role::get_by_id).put(role::update).delete(role::delete),
        )
        .route("/{id}/users", get(role::list_users))
}

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/projects   -> project::list_by_user (any authenticated user)
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route("/{id}/projects", get(project::list_by_user))
}
