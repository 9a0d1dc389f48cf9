//! Handlers for `/rag`: thin authenticated proxies to the RAG service.
//!
//! Upstream failures surface through [`crate::error::AppError::Rag`]: a
//! non-2xx reply is passed through as-is, an unreachable service is a 500.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rpm_core::error::CoreError;
use rpm_core::types::DbId;
use rpm_core::validation::require_non_blank;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::rag::dto::{
    BudgetGenerationRequest, BudgetGenerationResponse, BudgetSuggestionsResponse,
    ProjectDocumentsResponse, QueryRequest, QueryResponse, RagHealth, UploadResponse,
};
use crate::rag::{DocumentUpload, UpstreamReply};
use crate::state::AppState;

/// Document type used when the upload form does not name one.
const DEFAULT_DOCUMENT_TYPE: &str = "project_document";

/// Query parameters for `GET /rag/projects/{id}/budget/suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub category: Option<String>,
}

/// GET /api/v1/rag/health
pub async fn health(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<RagHealth>> {
    Ok(Json(state.rag.health().await?))
}

/// POST /api/v1/rag/query
pub async fn query(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    require_non_blank("question", &input.question)?;
    Ok(Json(state.rag.query(&input).await?))
}

/// POST /api/v1/rag/budget/generate
pub async fn generate_budget(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<BudgetGenerationRequest>,
) -> AppResult<Json<BudgetGenerationResponse>> {
    if input.project_id <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "A valid projectId is required".into(),
        )));
    }
    require_non_blank("projectDescription", &input.project_description)?;
    Ok(Json(state.rag.generate_budget(&input).await?))
}

/// GET /api/v1/rag/projects/{id}/documents
pub async fn project_documents(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProjectDocumentsResponse>> {
    Ok(Json(state.rag.project_documents(project_id).await?))
}

/// DELETE /api/v1/rag/documents/{document_id}
pub async fn delete_document(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(document_id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rag.delete_document(&document_id).await?))
}

/// GET /api/v1/rag/projects/{id}/budget/suggestions
pub async fn budget_suggestions(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(project_id): Path<DbId>,
    Query(params): Query<SuggestionParams>,
) -> AppResult<Json<BudgetSuggestionsResponse>> {
    let suggestions = state
        .rag
        .budget_suggestions(project_id, params.category.as_deref())
        .await?;
    Ok(Json(suggestions))
}

/// POST /api/v1/rag/documents/upload
///
/// Multipart fields: `file` (required, non-empty), `projectId`, `documentType`.
pub async fn upload_document(
    State(state): State<AppState>,
    _user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut project_id: Option<DbId> = None;
    let mut document_type = DEFAULT_DOCUMENT_TYPE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                file = Some((filename, content_type, data.to_vec()));
            }
            "projectId" => {
                let text = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                if !text.trim().is_empty() {
                    let id = text.trim().parse::<DbId>().map_err(|_| {
                        AppError::BadRequest(format!("projectId must be an integer, got '{text}'"))
                    })?;
                    project_id = Some(id);
                }
            }
            "documentType" => {
                let text = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                if !text.trim().is_empty() {
                    document_type = text;
                }
            }
            _ => {}
        }
    }

    let (filename, content_type, data) = file
        .filter(|(_, _, data)| !data.is_empty())
        .ok_or_else(|| AppError::BadRequest("No file provided".into()))?;

    tracing::info!(%filename, bytes = data.len(), ?project_id, "Forwarding document upload");
    let response = state
        .rag
        .upload_document(DocumentUpload {
            filename,
            content_type,
            data,
            project_id,
            document_type,
        })
        .await?;
    Ok(Json(response))
}

/// Over-limit bodies keep axum's 413; anything else is a malformed form.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// GET /api/v1/rag/projects/{id}/activities/extract
///
/// Long-running; mounted outside the global request timeout.
pub async fn extract_activities(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<UpstreamReply> {
    Ok(state.rag.extract_activities(project_id).await?)
}

/// POST /api/v1/rag/projects/{id}/budget/save
///
/// Always 501 until budgets can be stored against the current resource model.
pub async fn save_budget(_user: AuthUser, Path(project_id): Path<DbId>) -> AppResult<()> {
    tracing::debug!(project_id, "Budget save requested");
    Err(AppError::NotImplemented(
        "Saving generated budgets is not available yet".into(),
    ))
}
