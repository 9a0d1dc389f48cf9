use std::sync::Arc;

use crate::auth::two_factor::{CodeDelivery, LogDelivery};
use crate::config::ServerConfig;
use crate::rag::RagClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool, the HTTP client and the RAG client are handles
/// over shared internals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rpm_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound HTTP client (Google OAuth, n8n).
    pub http: reqwest::Client,
    /// Client for the document-extraction service.
    pub rag: RagClient,
    /// Channel for two-factor sign-in codes.
    pub code_delivery: Arc<dyn CodeDelivery>,
}

impl AppState {
    pub fn new(pool: rpm_db::DbPool, config: ServerConfig, http: reqwest::Client) -> Self {
        let rag = RagClient::new(http.clone(), &config.rag);
        Self {
            pool,
            config: Arc::new(config),
            http,
            rag,
            code_delivery: Arc::new(LogDelivery),
        }
    }

    /// Replace the default log-only code delivery.
    pub fn with_code_delivery(mut self, delivery: Arc<dyn CodeDelivery>) -> Self {
        self.code_delivery = delivery;
        self
    }
}
