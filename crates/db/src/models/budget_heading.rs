//! Budget heading (`rubros`) model and DTOs.

use rpm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHeading {
    #[serde(rename = "rubroId")]
    pub id: DbId,
    pub descripcion: String,
}

/// Create and update share the same shape.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHeadingInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub descripcion: String,
}
