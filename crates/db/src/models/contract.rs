//! Contracting profile (`contrataciones`) model and DTOs.

use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Salary band used to cost human-talent resources.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(rename = "contratacionId")]
    pub id: DbId,
    pub nivel_gestion: String,
    pub categoria: String,
    pub identidad_academica: String,
    pub experiencia_minima: String,
    pub iva: Money,
    pub valor_mensual: Money,
}

/// Create and update share the same shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInput {
    pub nivel_gestion: String,
    pub categoria: String,
    pub identidad_academica: String,
    pub experiencia_minima: String,
    pub iva: Money,
    pub valor_mensual: Money,
}
