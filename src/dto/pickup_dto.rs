use serde::Deserialize;
use validator::Validate;

use crate::models::NewPendingPickup;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{
    normalize_optional, normalize_plate, normalize_text, parse_date, validate_date,
    validate_not_empty,
};

// Formulario de papeles a retirar
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreatePendingPickupForm {
    #[serde(alias = "cliente")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub client: String,

    #[serde(alias = "patente")]
    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub plate: String,

    #[serde(alias = "lugar_registro")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub registry_location: String,

    #[serde(alias = "fecha_presentacion")]
    #[validate(custom = "validate_date")]
    pub submission_date: String,

    #[serde(alias = "comentarios")]
    pub comments: Option<String>,
}

impl CreatePendingPickupForm {
    pub fn into_new_pickup(self) -> AppResult<NewPendingPickup> {
        let form = Self {
            client: normalize_text(&self.client),
            plate: normalize_plate(&self.plate),
            registry_location: normalize_text(&self.registry_location),
            submission_date: normalize_text(&self.submission_date),
            comments: normalize_optional(self.comments),
        };
        form.validate()?;

        let submission_date = parse_date(&form.submission_date)
            .map_err(|_| validation_error("submission_date", "invalid date"))?;

        Ok(NewPendingPickup {
            client: form.client,
            plate: form.plate,
            registry_location: form.registry_location,
            submission_date,
            comments: form.comments,
        })
    }
}
