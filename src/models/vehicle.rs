//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su variante de inserción.
//! Mapea exactamente a la tabla `vehicles`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub client: String,
    pub model: String,
    pub purchase_location: String,
    pub color: String,
    pub plate: String,
    pub created_at: DateTime<Utc>,
}

/// Vehículo validado y normalizado, listo para insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub client: String,
    pub model: String,
    pub purchase_location: String,
    pub color: String,
    pub plate: String,
}

/// Par (cliente, patente) para el autocompletado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct VehicleSummary {
    pub client: String,
    pub plate: String,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            client: vehicle.client.clone(),
            plate: vehicle.plate.clone(),
        }
    }
}
