//! Route definitions for the `/tasks` and `/task-schedules` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{talent_task, task, task_schedule};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/schedules     -> task_schedule::list_by_task
/// GET    /{id}/talent-tasks  -> talent_task::list_by_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/schedules", get(task_schedule::list_by_task))
        .route("/{id}/talent-tasks", get(talent_task::list_by_task))
}

/// Routes mounted at `/task-schedules`.
pub fn schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(task_schedule::list).post(task_schedule::create))
        .route(
            "/{id}",
            get(task_schedule::get_by_id)
                .put(task_schedule::update)
                .delete(task_schedule::delete),
        )
}
