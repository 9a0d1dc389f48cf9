//! Assignment of a human-talent resource to a task.

use rpm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `talento_humano_tareas`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentTask {
    #[serde(rename = "talentoHumanoTareasId")]
    pub id: DbId,
    pub talento_humano_id: DbId,
    pub tarea_id: DbId,
    pub horas_asignadas: i32,
    pub rol_en_tarea: String,
    pub observaciones: String,
    pub fecha_asignacion: Timestamp,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTalentTask {
    pub talento_humano_id: DbId,
    pub tarea_id: DbId,
    pub horas_asignadas: i32,
    pub rol_en_tarea: String,
    pub observaciones: String,
    /// Defaults to the insertion time.
    pub fecha_asignacion: Option<Timestamp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTalentTask {
    pub talento_humano_id: DbId,
    pub tarea_id: DbId,
    pub horas_asignadas: i32,
    pub rol_en_tarea: String,
    pub observaciones: String,
    pub fecha_asignacion: Timestamp,
}
