//! Route definitions for `/partners` and `/activity-partners`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity, activity_partner, partner};
use crate::state::AppState;

/// Routes mounted at `/partners`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/activities   -> activity::list_by_partner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(partner::list).post(partner::create))
        .route(
            "/{id}",
            get(partner::get_by_id)
                .put(partner::update)
                .delete(partner::delete),
        )
        .route("/{id}/activities", get(activity::list_by_partner))
}

/// Routes mounted at `/activity-partners`.
pub fn contribution_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(activity_partner::list).post(activity_partner::create),
        )
        .route(
            "/{id}",
            get(activity_partner::get_by_id)
                .put(activity_partner::update)
                .delete(activity_partner::delete),
        )
}
