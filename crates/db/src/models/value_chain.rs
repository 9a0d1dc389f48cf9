//! Value chain model and DTOs.

use rpm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A value chain row from the `cadenas_de_valor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChain {
    #[serde(rename = "cadenaDeValorId")]
    pub id: DbId,
    pub objetivo_id: DbId,
    pub nombre: String,
    pub objetivo_especifico: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateValueChain {
    pub objetivo_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub objetivo_especifico: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValueChain {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub objetivo_especifico: String,
}
