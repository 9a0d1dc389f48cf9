//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity, activity_partner, resource, task};
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/tasks        -> task::list_by_activity
/// GET    /{id}/resources    -> resource::list_by_activity
/// GET    /{id}/partners     -> activity_partner::list_by_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity::list).post(activity::create))
        .route(
            "/{id}",
            get(activity::get_by_id)
                .put(activity::update)
                .delete(activity::delete),
        )
        .route("/{id}/tasks", get(task::list_by_activity))
        .route("/{id}/resources", get(resource::list_by_activity))
        .route("/{id}/partners", get(activity_partner::list_by_activity))
}
