//! Activity model and DTOs.
//!
//! An activity keeps one amount per project year in `totales_por_anio`;
//! its total value is derived from that list and never stored.

use rpm_core::budget;
use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An activity row from the `actividades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "actividadId")]
    pub id: DbId,
    pub cadena_de_valor_id: DbId,
    pub nombre: String,
    pub descripcion: String,
    pub justificacion: String,
    pub duracion_anios: i32,
    pub especificaciones_tecnicas: String,
    pub valor_unitario: Money,
    pub totales_por_anio: Vec<Money>,
}

/// An activity together with its derived `valorTotal`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    #[serde(flatten)]
    pub activity: Activity,
    pub valor_total: Money,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        let valor_total = budget::activity_total(&activity.totales_por_anio);
        Self {
            activity,
            valor_total,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub cadena_de_valor_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub justificacion: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duracion_anios: i32,
    pub especificaciones_tecnicas: String,
    pub valor_unitario: Money,
    #[serde(default)]
    pub totales_por_anio: Vec<Money>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivity {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub descripcion: String,
    pub justificacion: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duracion_anios: i32,
    pub especificaciones_tecnicas: String,
    pub valor_unitario: Money,
    pub totales_por_anio: Vec<Money>,
}
