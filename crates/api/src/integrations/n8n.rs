//! Forwarding of client payloads to an n8n webhook.
//!
//! One POST per call, no retries. The reply is read as text whatever its
//! status so the handler can echo it back.

use axum::http::StatusCode;

/// What the webhook answered.
#[derive(Debug, Clone)]
pub struct WebhookReply {
    pub status: StatusCode,
    pub body: String,
}

/// POST `payload` as JSON to `url`.
pub async fn forward(
    http: &reqwest::Client,
    url: &str,
    payload: &serde_json::Value,
) -> Result<WebhookReply, reqwest::Error> {
    let response = http.post(url).json(payload).send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(WebhookReply { status, body })
}
