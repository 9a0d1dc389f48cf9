//! Per-year remuneration of a human-talent resource.

use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `remuneraciones_por_anio`. `talentoHumanoId` is the id of the
/// TalentoHumano detail row (`datosId` on the specific resource).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualRemuneration {
    #[serde(rename = "remuneracionPorAnioId")]
    pub id: DbId,
    pub talento_humano_id: DbId,
    pub anio: i32,
    pub honorarios: Money,
    pub valor_hora: Money,
    pub semanas_anio: i32,
    pub total_anio: Money,
}

/// Create and update share the same shape; the talent reference may change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualRemunerationInput {
    pub talento_humano_id: DbId,
    pub anio: i32,
    pub honorarios: Money,
    pub valor_hora: Money,
    pub semanas_anio: i32,
    pub total_anio: Money,
}
