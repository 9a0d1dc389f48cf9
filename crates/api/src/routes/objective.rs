//! Route definitions for the `/objectives` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{objective, value_chain};
use crate::state::AppState;

/// Routes mounted at `/objectives`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/value-chains   -> value_chain::list_by_objective
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(objective::list).post(objective::create))
        .route(
            "/{id}",
            get(objective::get_by_id)
                .put(objective::update)
                .delete(objective::delete),
        )
        .route("/{id}/value-chains", get(value_chain::list_by_objective))
}
