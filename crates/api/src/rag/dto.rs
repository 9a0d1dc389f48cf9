//! Wire types of the RAG service.
//!
//! The service speaks snake_case; this API speaks camelCase. Requests are
//! read as camelCase and forwarded as snake_case, responses the other way
//! round.

use rpm_core::resource_kind::ResourceKind;
use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};

fn default_top_k() -> u32 {
    5
}

fn default_duration_years() -> i32 {
    1
}

fn default_budget_categories() -> Vec<String> {
    [
        ResourceKind::TalentoHumano,
        ResourceKind::ServiciosTecnologicos,
        ResourceKind::EquiposSoftware,
        ResourceKind::MaterialesInsumos,
        ResourceKind::CapacitacionEventos,
        ResourceKind::GastosViaje,
    ]
    .iter()
    .map(|kind| kind.as_str().to_string())
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase", serialize = "snake_case"))]
pub struct QueryRequest {
    pub question: String,
    #[serde(default)]
    pub project_id: Option<DbId>,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<QuerySource>,
    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct QuerySource {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub similarity: f32,
}

/// An activity handed to budget generation as extra context.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase", serialize = "snake_case"))]
pub struct BudgetActivity {
    #[serde(default)]
    pub actividad_id: Option<DbId>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub justificacion: Option<String>,
    #[serde(default)]
    pub especificaciones_tecnicas: Option<String>,
    #[serde(default)]
    pub cantidad_anios: Option<i32>,
    #[serde(default)]
    pub valor_unitario: Option<Money>,
    #[serde(default)]
    pub duracion_dias: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase", serialize = "snake_case"))]
pub struct BudgetGenerationRequest {
    pub project_id: DbId,
    #[serde(default)]
    pub project_description: String,
    #[serde(default = "default_budget_categories")]
    pub budget_categories: Vec<String>,
    #[serde(default = "default_duration_years")]
    pub duration_years: i32,
    #[serde(default)]
    pub activities: Option<Vec<BudgetActivity>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct BudgetGenerationResponse {
    pub project_id: DbId,
    #[serde(default)]
    pub budget_data: serde_json::Value,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub confidence_score: f32,
    #[serde(default)]
    pub excel_path: Option<String>,
    #[serde(default)]
    pub source_documents: Option<i32>,
    #[serde(default)]
    pub source_activities: Option<i32>,
    /// `"llm_based"` or `"document_based"`.
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct ProjectDocument {
    pub document_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub content_preview: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct ProjectDocumentsResponse {
    pub project_id: DbId,
    #[serde(default)]
    pub documents: Vec<ProjectDocument>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct BudgetSuggestion {
    pub category: String,
    #[serde(default)]
    pub suggested_items: Vec<serde_json::Value>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct BudgetSuggestionsResponse {
    pub project_id: DbId,
    #[serde(default)]
    pub suggestions: Vec<BudgetSuggestion>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub document_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub project_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct RagHealth {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Shape an extraction answer must have. Only used to check the body; the
/// body itself is returned untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionResult {
    pub project_id: DbId,
    pub activities: Vec<ExtractedActivity>,
    #[serde(default)]
    pub total_activities: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedActivity {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub technical_specifications: Option<String>,
    #[serde(default)]
    pub duration_years: Option<i32>,
    #[serde(default)]
    pub unit_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_is_forwarded_in_snake_case() {
        let request: QueryRequest =
            serde_json::from_value(json!({ "question": "Costo total?", "projectId": 7 })).unwrap();
        assert_eq!(request.top_k, 5);

        let forwarded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            forwarded,
            json!({ "question": "Costo total?", "project_id": 7, "top_k": 5 })
        );
    }

    #[test]
    fn budget_request_defaults_categories() {
        let request: BudgetGenerationRequest = serde_json::from_value(json!({
            "projectId": 3,
            "projectDescription": "Planta piloto"
        }))
        .unwrap();
        assert_eq!(request.duration_years, 1);
        assert_eq!(request.budget_categories.len(), 6);
        assert_eq!(request.budget_categories[0], "TalentoHumano");
    }

    #[test]
    fn upstream_answer_is_returned_in_camel_case() {
        let response: UploadResponse = serde_json::from_value(json!({
            "message": "ok",
            "document_id": "doc-1",
            "filename": "plan.pdf",
            "project_id": 3
        }))
        .unwrap();
        let out = serde_json::to_value(&response).unwrap();
        assert_eq!(out["documentId"], "doc-1");
        assert_eq!(out["projectId"], 3);
    }

    #[test]
    fn extraction_requires_activity_list() {
        assert!(serde_json::from_value::<ExtractionResult>(json!({ "project_id": 1 })).is_err());
        let ok: ExtractionResult = serde_json::from_value(json!({
            "project_id": 1,
            "activities": [{ "name": "Diagnostico", "duration_years": 1 }],
            "total_activities": 1
        }))
        .unwrap();
        assert_eq!(ok.activities[0].name, "Diagnostico");
    }
}
