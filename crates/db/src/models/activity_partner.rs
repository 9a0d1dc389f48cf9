//! Partner contribution to an activity (`act_x_entidades`).

use rpm_core::budget;
use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartner {
    #[serde(rename = "actXEntidadId")]
    pub id: DbId,
    pub actividad_id: DbId,
    pub entidad_id: DbId,
    pub efectivo: Money,
    pub especie: Money,
}

/// A contribution together with its derived `totalContribucion`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartnerResponse {
    #[serde(flatten)]
    pub contribution: ActivityPartner,
    pub total_contribucion: Money,
}

impl From<ActivityPartner> for ActivityPartnerResponse {
    fn from(contribution: ActivityPartner) -> Self {
        let total_contribucion =
            budget::partner_contribution(contribution.efectivo, contribution.especie);
        Self {
            contribution,
            total_contribucion,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityPartner {
    pub actividad_id: DbId,
    pub entidad_id: DbId,
    pub efectivo: Money,
    pub especie: Money,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityPartner {
    pub efectivo: Money,
    pub especie: Money,
}
