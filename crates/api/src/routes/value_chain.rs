//! Route definitions for the `/value-chains` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity, value_chain};
use crate::state::AppState;

/// Routes mounted at `/value-chains`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/activities   -> activity::list_by_value_chain
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(value_chain::list).post(value_chain::create))
        .route(
            "/{id}",
            get(value_chain::get_by_id)
                .put(value_chain::update)
                .delete(value_chain::delete),
        )
        .route("/{id}/activities", get(activity::list_by_value_chain))
}
