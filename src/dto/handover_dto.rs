use serde::Deserialize;
use validator::Validate;

use crate::models::NewDocumentHandover;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{
    normalize_plate, normalize_text, parse_date, validate_date, validate_not_empty,
};

// Formulario de entrega de papeles
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateDocumentHandoverForm {
    #[serde(alias = "cliente")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub client: String,

    #[serde(alias = "patente")]
    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub plate: String,

    /// YYYY-MM-DD
    #[serde(alias = "fecha_entrega")]
    #[validate(custom = "validate_date")]
    pub handover_date: String,

    #[serde(alias = "documentacion_entregada")]
    #[validate(custom = "validate_not_empty")]
    pub delivered_documents: String,
}

impl CreateDocumentHandoverForm {
    pub fn into_new_handover(self) -> AppResult<NewDocumentHandover> {
        let form = Self {
            client: normalize_text(&self.client),
            plate: normalize_plate(&self.plate),
            handover_date: normalize_text(&self.handover_date),
            delivered_documents: normalize_text(&self.delivered_documents),
        };
        form.validate()?;

        let handover_date = parse_date(&form.handover_date)
            .map_err(|_| validation_error("handover_date", "invalid date"))?;

        Ok(NewDocumentHandover {
            client: form.client,
            plate: form.plate,
            handover_date,
            delivered_documents: form.delivered_documents,
        })
    }
}
