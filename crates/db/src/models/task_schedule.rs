//! Task schedule model and DTOs.

use rpm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A schedule row from the `cronograma_tareas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSchedule {
    #[serde(rename = "cronogramaId")]
    pub id: DbId,
    pub tarea_id: DbId,
    pub duracion_meses: i32,
    pub duracion_dias: i32,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskSchedule {
    pub tarea_id: DbId,
    pub duracion_meses: i32,
    pub duracion_dias: i32,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskSchedule {
    pub duracion_meses: i32,
    pub duracion_dias: i32,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
}
