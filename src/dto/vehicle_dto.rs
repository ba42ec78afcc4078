use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewVehicle, Vehicle};
use crate::utils::errors::AppResult;
use crate::utils::validation::{normalize_plate, normalize_text, validate_not_empty};

// Formulario para crear un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateVehicleForm {
    #[serde(alias = "cliente")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub client: String,

    #[serde(alias = "modelo")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub model: String,

    #[serde(alias = "lugar_compra")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub purchase_location: String,

    #[validate(custom = "validate_not_empty", length(max = 50))]
    pub color: String,

    #[serde(alias = "patente")]
    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub plate: String,
}

impl CreateVehicleForm {
    /// Normalizar, validar y convertir a un vehículo insertable
    pub fn into_new_vehicle(self) -> AppResult<NewVehicle> {
        let form = Self {
            client: normalize_text(&self.client),
            model: normalize_text(&self.model),
            purchase_location: normalize_text(&self.purchase_location),
            color: normalize_text(&self.color),
            plate: normalize_plate(&self.plate),
        };
        form.validate()?;

        Ok(NewVehicle {
            client: form.client,
            model: form.model,
            purchase_location: form.purchase_location,
            color: form.color,
            plate: form.plate,
        })
    }
}

// Response del lookup por patente (autocompletado)
#[derive(Debug, Serialize)]
pub struct VehicleLookupResponse {
    pub client: String,
    pub plate: String,
    pub model: String,
    pub color: String,
}

impl From<Vehicle> for VehicleLookupResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            client: vehicle.client,
            plate: vehicle.plate,
            model: vehicle.model,
            color: vehicle.color,
        }
    }
}
