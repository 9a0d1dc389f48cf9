//! Handlers for `/integrations`.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::integrations::n8n;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/integrations/n8n
///
/// Relays the JSON body to `N8N_WEBHOOK_URL`. A non-2xx answer keeps its
/// status and carries the upstream text under `details`.
pub async fn send_to_n8n(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Response> {
    let url = state.config.n8n_webhook_url.as_deref().ok_or_else(|| {
        AppError::BadRequest("N8N webhook URL not configured (N8N_WEBHOOK_URL)".into())
    })?;

    let reply = n8n::forward(&state.http, url, &payload)
        .await
        .map_err(AppError::Integration)?;

    if !reply.status.is_success() {
        tracing::warn!(status = %reply.status, user_id = user.user_id, "n8n returned an error");
        let body = json!({ "error": "n8n returned error", "details": reply.body });
        return Ok((reply.status, Json(body)).into_response());
    }

    tracing::info!(user_id = user.user_id, "Payload sent to n8n");
    Ok(Json(json!({ "status": "sent", "response": reply.body })).into_response())
}
