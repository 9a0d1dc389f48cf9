//! Route definitions for the `/rag` proxy.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::rag;
use crate::rag::RagConfig;
use crate::state::AppState;

/// Routes mounted at `/rag`, under the global request timeout.
///
/// ```text
/// GET    /health                                -> health
/// POST   /query                                 -> query
/// POST   /budget/generate                       -> generate_budget
/// POST   /documents/upload                      -> upload_document
/// DELETE /documents/{document_id}               -> delete_document
/// GET    /projects/{id}/documents               -> project_documents
/// GET    /projects/{id}/budget/suggestions      -> budget_suggestions
/// POST   /projects/{id}/budget/save             -> save_budget (501)
/// ```
///
/// Uploads accept bodies up to `config.upload_max_bytes` instead of axum's
/// 2 MiB default.
pub fn router(config: &RagConfig) -> Router<AppState> {
    Router::new()
        .route("/health", get(rag::health))
        .route("/query", post(rag::query))
        .route("/budget/generate", post(rag::generate_budget))
        .route(
            "/documents/upload",
            post(rag::upload_document).layer(DefaultBodyLimit::max(config.upload_max_bytes)),
        )
        .route("/documents/{document_id}", delete(rag::delete_document))
        .route("/projects/{id}/documents", get(rag::project_documents))
        .route(
            "/projects/{id}/budget/suggestions",
            get(rag::budget_suggestions),
        )
        .route("/projects/{id}/budget/save", post(rag::save_budget))
}

/// Activity extraction, mounted at `/rag` with its own timeout.
///
/// ```text
/// GET /projects/{id}/activities/extract   -> extract_activities
/// ```
pub fn extraction_router() -> Router<AppState> {
    Router::new().route(
        "/projects/{id}/activities/extract",
        get(rag::extract_activities),
    )
}
