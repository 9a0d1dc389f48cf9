//! Route definitions for `/integrations`.

use axum::routing::post;
use axum::Router;

use crate::handlers::integration;
use crate::state::AppState;

/// ```text
/// POST /n8n   -> send_to_n8n
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/n8n", post(integration::send_to_n8n))
}
