//! Filtros de búsqueda de los listados
//!
//! Todos los filtros son opcionales; un filtro vacío no restringe nada.

use serde::{Deserialize, Serialize};

use crate::utils::validation::normalize_plate;

/// Filtros comunes: cliente y patente
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListFilters {
    #[serde(alias = "cliente")]
    pub client: Option<String>,
    #[serde(alias = "patente")]
    pub plate: Option<String>,
}

impl ListFilters {
    pub fn normalized(self) -> Self {
        Self {
            client: normalize_filter(self.client),
            plate: normalize_plate_filter(self.plate),
        }
    }
}

/// Filtros de papeles a retirar: además el lugar de registro
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickupFilters {
    #[serde(alias = "cliente")]
    pub client: Option<String>,
    #[serde(alias = "patente")]
    pub plate: Option<String>,
    #[serde(alias = "lugar")]
    pub location: Option<String>,
}

impl PickupFilters {
    pub fn normalized(self) -> Self {
        Self {
            client: normalize_filter(self.client),
            plate: normalize_plate_filter(self.plate),
            location: normalize_filter(self.location),
        }
    }
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Las patentes se guardan en mayúsculas; el filtro se alinea con eso
fn normalize_plate_filter(value: Option<String>) -> Option<String> {
    value.map(|v| normalize_plate(&v)).filter(|v| !v.is_empty())
}
