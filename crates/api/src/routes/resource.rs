//! Route definitions for budget headings, resources and specific resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{budget_heading, resource, specific_resource};
use crate::state::AppState;

/// Routes mounted at `/budget-headings`.
pub fn heading_router() -> Router<AppState> {
    Router::new()
        .route("/", get(budget_heading::list).post(budget_heading::create))
        .route(
            "/{id}",
            get(budget_heading::get_by_id)
                .put(budget_heading::update)
                .delete(budget_heading::delete),
        )
}

/// Routes mounted at `/resources`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// GET    /{id}/specific-resources     -> specific_resource::list_by_resource
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list).post(resource::create))
        .route(
            "/{id}",
            get(resource::get_by_id)
                .put(resource::update)
                .delete(resource::delete),
        )
        .route(
            "/{id}/specific-resources",
            get(specific_resource::list_by_resource),
        )
}

/// Routes mounted at `/specific-resources`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /kind/{tipo}    -> list_by_kind
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn specific_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(specific_resource::list).post(specific_resource::create),
        )
        .route("/kind/{tipo}", get(specific_resource::list_by_kind))
        .route(
            "/{id}",
            get(specific_resource::get_by_id)
                .put(specific_resource::update)
                .delete(specific_resource::delete),
        )
}
