//! Research project model and DTOs.

use rpm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status given to projects created without one.
pub const DEFAULT_PROJECT_STATUS: &str = "Activo";

/// A project row from the `proyectos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "proyectoId")]
    pub id: DbId,
    pub nombre: String,
    pub fecha_creacion: Timestamp,
    pub estado: String,
    pub usuario_id: DbId,
}

/// DTO for creating a project. `fechaCreacion` is set by the database.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub usuario_id: DbId,
    /// Defaults to [`DEFAULT_PROJECT_STATUS`].
    pub estado: Option<String>,
}

/// DTO for overwriting a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub estado: String,
}
