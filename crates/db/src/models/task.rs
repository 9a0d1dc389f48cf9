//! Task model and DTOs.

use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task row from the `tareas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "tareaId")]
    pub id: DbId,
    pub actividad_id: DbId,
    pub nombre: String,
    pub descripcion: String,
    pub periodo: String,
    pub monto: Money,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub actividad_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub periodo: String,
    pub monto: Money,
}

/// DTO for overwriting a task. A task may move to another activity.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub actividad_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub periodo: String,
    pub monto: Money,
}
