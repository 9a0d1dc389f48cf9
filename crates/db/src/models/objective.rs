//! Project objective model and DTOs.

use rpm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An objective row from the `objetivos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    #[serde(rename = "objetivoId")]
    pub id: DbId,
    pub proyecto_id: DbId,
    pub nombre: String,
    pub descripcion: String,
    pub resultado_esperado: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjective {
    pub proyecto_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub resultado_esperado: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateObjective {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub resultado_esperado: String,
}
