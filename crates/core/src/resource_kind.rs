//! Kinds of specific resources (budget line-item categories).
//!
//! A specific resource carries exactly one category-specific payload. The
//! kind name doubles as the `tipo` discriminator on the wire and in the
//! `recursos_especificos.tipo` column, and each kind owns one detail table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category of a specific resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    TalentoHumano,
    EquiposSoftware,
    ServiciosTecnologicos,
    MaterialesInsumos,
    CapacitacionEventos,
    GastosViaje,
    Infraestructura,
    Administrativos,
    ProteccionConocimientoDivulgacion,
    SeguimientoEvaluacion,
    Divulgacion,
    Otros,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::TalentoHumano,
        ResourceKind::EquiposSoftware,
        ResourceKind::ServiciosTecnologicos,
        ResourceKind::MaterialesInsumos,
        ResourceKind::CapacitacionEventos,
        ResourceKind::GastosViaje,
        ResourceKind::Infraestructura,
        ResourceKind::Administrativos,
        ResourceKind::ProteccionConocimientoDivulgacion,
        ResourceKind::SeguimientoEvaluacion,
        ResourceKind::Divulgacion,
        ResourceKind::Otros,
    ];

    /// Discriminator string stored in `recursos_especificos.tipo`.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::TalentoHumano => "TalentoHumano",
            ResourceKind::EquiposSoftware => "EquiposSoftware",
            ResourceKind::ServiciosTecnologicos => "ServiciosTecnologicos",
            ResourceKind::MaterialesInsumos => "MaterialesInsumos",
            ResourceKind::CapacitacionEventos => "CapacitacionEventos",
            ResourceKind::GastosViaje => "GastosViaje",
            ResourceKind::Infraestructura => "Infraestructura",
            ResourceKind::Administrativos => "Administrativos",
            ResourceKind::ProteccionConocimientoDivulgacion => "ProteccionConocimientoDivulgacion",
            ResourceKind::SeguimientoEvaluacion => "SeguimientoEvaluacion",
            ResourceKind::Divulgacion => "Divulgacion",
            ResourceKind::Otros => "Otros",
        }
    }

    /// Name of the detail table holding this kind's payload.
    pub fn detail_table(self) -> &'static str {
        match self {
            ResourceKind::TalentoHumano => "talento_humano",
            ResourceKind::EquiposSoftware => "equipos_software",
            ResourceKind::ServiciosTecnologicos => "servicios_tecnologicos",
            ResourceKind::MaterialesInsumos => "materiales_insumos",
            ResourceKind::CapacitacionEventos => "capacitacion_eventos",
            ResourceKind::GastosViaje => "gastos_viaje",
            ResourceKind::Infraestructura => "infraestructura",
            ResourceKind::Administrativos => "administrativos",
            ResourceKind::ProteccionConocimientoDivulgacion => {
                "proteccion_conocimiento_divulgacion"
            }
            ResourceKind::SeguimientoEvaluacion => "seguimiento_evaluacion",
            ResourceKind::Divulgacion => "divulgacion",
            ResourceKind::Otros => "otros",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown resource kind '{s}'. Must be one of: {}",
                    ResourceKind::ALL.map(ResourceKind::as_str).join(", ")
                ))
            })
    }
}
