//! Activity resource (`recursos`) model and DTOs.

use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A budgeted resource of an activity, funded by one partner under one
/// budget heading.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "recursoId")]
    pub id: DbId,
    pub actividad_id: DbId,
    pub entidad_id: DbId,
    pub rubro_id: DbId,
    pub tipo_recurso: String,
    pub monto_efectivo: Money,
    pub monto_especie: Money,
    pub descripcion: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub actividad_id: DbId,
    pub entidad_id: DbId,
    pub rubro_id: DbId,
    pub tipo_recurso: String,
    pub monto_efectivo: Money,
    pub monto_especie: Money,
    pub descripcion: String,
}

/// DTO for overwriting a resource. Partner and heading may change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    pub entidad_id: DbId,
    pub rubro_id: DbId,
    pub tipo_recurso: String,
    pub monto_efectivo: Money,
    pub monto_especie: Money,
    pub descripcion: String,
}
