//! Client for the document-extraction (RAG) service.
//!
//! Every call is a single request with no retries. A non-2xx answer from the
//! service surfaces as [`RagError::Upstream`] carrying the status and body
//! unchanged so handlers can pass them through to the caller.

pub mod dto;

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use reqwest::multipart::{Form, Part};
use rpm_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use self::dto::{
    BudgetGenerationRequest, BudgetGenerationResponse, BudgetSuggestionsResponse,
    ExtractionResult, ProjectDocumentsResponse, QueryRequest, QueryResponse, RagHealth,
    UploadResponse,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8001";
const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 600;
const DEFAULT_UPLOAD_MAX_BYTES: usize = 50 * 1024 * 1024;

/// Where the RAG service lives, how long extraction may take and how large
/// an uploaded document may be.
#[derive(Debug, Clone)]
pub struct RagConfig {
    pub base_url: String,
    pub extraction_timeout_secs: u64,
    /// Request body cap on `/rag/documents/upload`.
    pub upload_max_bytes: usize,
}

impl RagConfig {
    /// Load RAG configuration from environment variables.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `RAG_BASE_URL`                 | `http://localhost:8001` |
    /// | `RAG_EXTRACTION_TIMEOUT_SECS`  | `600`                   |
    /// | `RAG_UPLOAD_MAX_BYTES`         | `52428800` (50 MiB)     |
    pub fn from_env() -> Self {
        let base_url = std::env::var("RAG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let extraction_timeout_secs: u64 = std::env::var("RAG_EXTRACTION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_EXTRACTION_TIMEOUT_SECS.to_string())
            .parse()
            .expect("RAG_EXTRACTION_TIMEOUT_SECS must be a valid u64");

        let upload_max_bytes: usize = std::env::var("RAG_UPLOAD_MAX_BYTES")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_MAX_BYTES.to_string())
            .parse()
            .expect("RAG_UPLOAD_MAX_BYTES must be a valid usize");

        Self {
            base_url,
            extraction_timeout_secs,
            upload_max_bytes,
        }
    }
}

/// Raw upstream answer: status, content type and body bytes, untouched.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        response
    }
}

/// Failure of a RAG service call.
#[derive(Debug, thiserror::Error)]
pub enum RagError {
    /// The service answered with a non-2xx status.
    #[error("RAG service returned status {}", .0.status)]
    Upstream(UpstreamReply),

    /// The service could not be reached, or did not answer in time.
    #[error("RAG service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// A 2xx body did not have the expected shape.
    #[error("RAG service returned an unexpected body: {0}")]
    InvalidResponse(String),
}

/// A file forwarded to `/documents/upload`.
#[derive(Debug)]
pub struct DocumentUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub project_id: Option<DbId>,
    pub document_type: String,
}

/// Typed wrapper around the RAG service HTTP API.
#[derive(Debug, Clone)]
pub struct RagClient {
    http: reqwest::Client,
    base_url: String,
    extraction_timeout: Duration,
}

impl RagClient {
    pub fn new(http: reqwest::Client, config: &RagConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            extraction_timeout: Duration::from_secs(config.extraction_timeout_secs),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /health
    pub async fn health(&self) -> Result<RagHealth, RagError> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }

    /// POST /query
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, RagError> {
        self.post_json("/query", request).await
    }

    /// POST /budget/generate
    pub async fn generate_budget(
        &self,
        request: &BudgetGenerationRequest,
    ) -> Result<BudgetGenerationResponse, RagError> {
        self.post_json("/budget/generate", request).await
    }

    /// GET /projects/{id}/documents
    pub async fn project_documents(
        &self,
        project_id: DbId,
    ) -> Result<ProjectDocumentsResponse, RagError> {
        let url = self.url(&format!("/projects/{project_id}/documents"));
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// DELETE /documents/{document_id}
    ///
    /// The service answers with a free-form confirmation object.
    pub async fn delete_document(&self, document_id: &str) -> Result<serde_json::Value, RagError> {
        let url = self.url(&format!("/documents/{document_id}"));
        let response = self.http.delete(url).send().await?;
        decode(response).await
    }

    /// GET /projects/{id}/budget/suggestions[?category=]
    pub async fn budget_suggestions(
        &self,
        project_id: DbId,
        category: Option<&str>,
    ) -> Result<BudgetSuggestionsResponse, RagError> {
        let url = self.url(&format!("/projects/{project_id}/budget/suggestions"));
        let mut request = self.http.get(url);
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            request = request.query(&[("category", category)]);
        }
        decode(request.send().await?).await
    }

    /// POST /documents/upload
    ///
    /// The file travels as multipart; the service reads `project_id` and
    /// `document_type` from the query string.
    pub async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> Result<UploadResponse, RagError> {
        let mut part = Part::bytes(upload.data).file_name(upload.filename);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);

        let mut query: Vec<(&str, String)> = vec![("document_type", upload.document_type)];
        if let Some(project_id) = upload.project_id {
            query.push(("project_id", project_id.to_string()));
        }

        let response = self
            .http
            .post(self.url("/documents/upload"))
            .query(&query)
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// GET /projects/{id}/activities/extract
    ///
    /// Runs under the extraction timeout. A 2xx body is checked against
    /// [`ExtractionResult`] and then returned byte-for-byte.
    pub async fn extract_activities(&self, project_id: DbId) -> Result<UpstreamReply, RagError> {
        let url = self.url(&format!("/projects/{project_id}/activities/extract"));
        let response = self
            .http
            .get(url)
            .timeout(self.extraction_timeout)
            .send()
            .await?;

        let reply = read_reply(response).await?;
        if !reply.status.is_success() {
            return Err(RagError::Upstream(reply));
        }
        let parsed: ExtractionResult = serde_json::from_slice(&reply.body)
            .map_err(|e| RagError::InvalidResponse(e.to_string()))?;
        tracing::info!(
            project_id,
            activities = parsed.activities.len(),
            "Activities extracted"
        );
        Ok(reply)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RagError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }
}

async fn read_reply(response: reqwest::Response) -> Result<UpstreamReply, RagError> {
    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let body = response.bytes().await?;
    Ok(UpstreamReply {
        status,
        content_type,
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RagError> {
    let reply = read_reply(response).await?;
    if !reply.status.is_success() {
        tracing::warn!(status = %reply.status, "RAG service returned an error");
        return Err(RagError::Upstream(reply));
    }
    serde_json::from_slice(&reply.body).map_err(|e| RagError::InvalidResponse(e.to_string()))
}
