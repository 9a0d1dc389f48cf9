//! Route definitions for contracts, annual remunerations, talent-task
//! assignments, and the `/talent/{id}` views over them.

use axum::routing::get;
use axum::Router;

use crate::handlers::{annual_remuneration, contract, talent_task};
use crate::state::AppState;

/// Routes mounted at `/contracts`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /category/{categoria}     -> list_by_category
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// ```
pub fn contract_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contract::list).post(contract::create))
        .route("/category/{categoria}", get(contract::list_by_category))
        .route(
            "/{id}",
            get(contract::get_by_id)
                .put(contract::update)
                .delete(contract::delete),
        )
}

/// Routes mounted at `/annual-remunerations`.
pub fn remuneration_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(annual_remuneration::list).post(annual_remuneration::create),
        )
        .route("/year/{anio}", get(annual_remuneration::list_by_year))
        .route(
            "/{id}",
            get(annual_remuneration::get_by_id)
                .put(annual_remuneration::update)
                .delete(annual_remuneration::delete),
        )
}

/// Routes mounted at `/talent-tasks`.
pub fn assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(talent_task::list).post(talent_task::create))
        .route(
            "/{id}",
            get(talent_task::get_by_id)
                .put(talent_task::update)
                .delete(talent_task::delete),
        )
}

/// Routes mounted at `/talent`, keyed by the human-talent specific resource.
///
/// ```text
/// GET /{id}/remunerations   -> annual_remuneration::list_by_talent
/// GET /{id}/tasks           -> talent_task::list_by_talent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/remunerations",
            get(annual_remuneration::list_by_talent),
        )
        .route("/{id}/tasks", get(talent_task::list_by_talent))
}
