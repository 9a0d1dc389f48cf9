//! Partner entity (`entidades`) model and DTOs.

use rpm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An institution that contributes to project activities.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(rename = "entidadId")]
    pub id: DbId,
    pub nombre: String,
}

/// Create and update share the same shape.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
}
