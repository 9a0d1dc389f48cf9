//! Specific resources: budget line items with a kind-specific payload.
//!
//! The payload is a tagged union. On the wire it appears as
//! `"tipo": "<kind>", "datos": { ... }` next to the common fields; in
//! storage each kind has its own detail table (see
//! [`ResourceKind::detail_table`]). A resource therefore always carries
//! exactly one payload whose kind equals `tipo`.

use rpm_core::resource_kind::ResourceKind;
use rpm_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanTalent {
    pub contratacion_id: DbId,
    pub cargo_especifico: String,
    pub semanas: i32,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSoftware {
    pub especificaciones_tecnicas: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyServices {
    pub descripcion: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsSupplies {
    pub materiales: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEvents {
    pub tema: String,
    pub cantidad: i32,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelExpenses {
    pub costo: Money,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub tipo_infraestructura: String,
    pub enlace: String,
    pub caracteristicas_tecnicas: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrative {
    pub cargo: String,
    pub razon_social: String,
    pub justificacion: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeProtection {
    pub actividad_hapat: String,
    pub entidad_responsable: String,
    pub justificacion: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringEvaluation {
    pub cargo_responsable: String,
    pub metodo_evaluacion: String,
    pub frecuencia: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dissemination {
    pub medio_divulgacion: String,
    pub alcance: String,
    pub justificacion: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Other {
    pub justificacion: String,
}

/// Kind-specific payload, tagged by `tipo` with the fields under `datos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "datos")]
pub enum ResourceDetail {
    TalentoHumano(HumanTalent),
    EquiposSoftware(EquipmentSoftware),
    ServiciosTecnologicos(TechnologyServices),
    MaterialesInsumos(MaterialsSupplies),
    CapacitacionEventos(TrainingEvents),
    GastosViaje(TravelExpenses),
    Infraestructura(Infrastructure),
    Administrativos(Administrative),
    ProteccionConocimientoDivulgacion(KnowledgeProtection),
    SeguimientoEvaluacion(MonitoringEvaluation),
    Divulgacion(Dissemination),
    Otros(Other),
}

impl ResourceDetail {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDetail::TalentoHumano(_) => ResourceKind::TalentoHumano,
            ResourceDetail::EquiposSoftware(_) => ResourceKind::EquiposSoftware,
            ResourceDetail::ServiciosTecnologicos(_) => ResourceKind::ServiciosTecnologicos,
            ResourceDetail::MaterialesInsumos(_) => ResourceKind::MaterialesInsumos,
            ResourceDetail::CapacitacionEventos(_) => ResourceKind::CapacitacionEventos,
            ResourceDetail::GastosViaje(_) => ResourceKind::GastosViaje,
            ResourceDetail::Infraestructura(_) => ResourceKind::Infraestructura,
            ResourceDetail::Administrativos(_) => ResourceKind::Administrativos,
            ResourceDetail::ProteccionConocimientoDivulgacion(_) => {
                ResourceKind::ProteccionConocimientoDivulgacion
            }
            ResourceDetail::SeguimientoEvaluacion(_) => ResourceKind::SeguimientoEvaluacion,
            ResourceDetail::Divulgacion(_) => ResourceKind::Divulgacion,
            ResourceDetail::Otros(_) => ResourceKind::Otros,
        }
    }
}

/// Common columns of a `recursos_especificos` row.
#[derive(Debug, Clone, FromRow)]
pub struct SpecificResourceRow {
    pub id: DbId,
    pub recurso_id: DbId,
    pub tipo: String,
    pub detalle: String,
    pub cantidad: i32,
    pub total: Money,
    pub periodo_num: i32,
    pub periodo_tipo: String,
}

/// A specific resource joined with its detail row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificResource {
    #[serde(rename = "recursoEspecificoId")]
    pub id: DbId,
    pub recurso_id: DbId,
    pub detalle: String,
    pub cantidad: i32,
    pub total: Money,
    pub periodo_num: i32,
    pub periodo_tipo: String,
    /// Id of the detail row. For `TalentoHumano` this is the id that
    /// remunerations and task assignments reference.
    pub datos_id: DbId,
    #[serde(flatten)]
    pub detail: ResourceDetail,
}

impl SpecificResource {
    pub fn kind(&self) -> ResourceKind {
        self.detail.kind()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecificResource {
    pub recurso_id: DbId,
    pub detalle: String,
    pub cantidad: i32,
    pub total: Money,
    pub periodo_num: i32,
    pub periodo_tipo: String,
    #[serde(flatten)]
    pub detail: ResourceDetail,
}

/// DTO for overwriting a specific resource. Sending a different `tipo`
/// replaces the detail row with one of the new kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpecificResource {
    pub detalle: String,
    pub cantidad: i32,
    pub total: Money,
    pub periodo_num: i32,
    pub periodo_tipo: String,
    #[serde(flatten)]
    pub detail: ResourceDetail,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn create_body_parses_tagged_payload() {
        let body = json!({
            "recursoId": 4,
            "detalle": "Viaje a Bogota",
            "cantidad": 2,
            "total": 1500.5,
            "periodoNum": 1,
            "periodoTipo": "Anio",
            "tipo": "GastosViaje",
            "datos": { "costo": 750.25 }
        });
        let input: CreateSpecificResource = serde_json::from_value(body).unwrap();
        assert_eq!(input.recurso_id, 4);
        assert_eq!(
            input.detail,
            ResourceDetail::GastosViaje(TravelExpenses {
                costo: Money::from_str("750.25").unwrap()
            })
        );
        assert_eq!(input.detail.kind(), ResourceKind::GastosViaje);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let body = json!({
            "recursoId": 4,
            "detalle": "",
            "cantidad": 1,
            "total": 0,
            "periodoNum": 1,
            "periodoTipo": "Mes",
            "tipo": "Viaticos",
            "datos": { "costo": 1 }
        });
        assert!(serde_json::from_value::<CreateSpecificResource>(body).is_err());
    }

    #[test]
    fn payload_must_match_kind() {
        let body = json!({
            "detalle": "",
            "cantidad": 1,
            "total": 0,
            "periodoNum": 1,
            "periodoTipo": "Mes",
            "tipo": "Otros",
            "datos": { "costo": 1 }
        });
        assert!(serde_json::from_value::<UpdateSpecificResource>(body).is_err());
    }

    #[test]
    fn serializes_tag_and_payload_beside_common_fields() {
        let resource = SpecificResource {
            id: 9,
            recurso_id: 4,
            detalle: "Licencias".into(),
            cantidad: 3,
            total: Money::from_str("90.00").unwrap(),
            periodo_num: 1,
            periodo_tipo: "Anio".into(),
            datos_id: 12,
            detail: ResourceDetail::EquiposSoftware(EquipmentSoftware {
                especificaciones_tecnicas: "GPU".into(),
            }),
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["recursoEspecificoId"], 9);
        assert_eq!(json["datosId"], 12);
        assert_eq!(json["tipo"], "EquiposSoftware");
        assert_eq!(json["datos"]["especificacionesTecnicas"], "GPU");
    }
}
