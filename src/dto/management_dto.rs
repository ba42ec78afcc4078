use serde::Deserialize;
use validator::Validate;

use crate::models::NewManagementRecord;
use crate::utils::errors::AppResult;
use crate::utils::validation::{normalize_optional, normalize_plate, normalize_text, validate_not_empty};

// Formulario de gestoría
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateManagementRecordForm {
    #[serde(alias = "cliente")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub client: String,

    #[serde(alias = "patente")]
    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub plate: String,

    #[serde(alias = "papeles_recibidos")]
    #[validate(custom = "validate_not_empty")]
    pub received_documents: String,

    #[serde(alias = "observaciones")]
    pub notes: Option<String>,
}

impl CreateManagementRecordForm {
    pub fn into_new_record(self) -> AppResult<NewManagementRecord> {
        let form = Self {
            client: normalize_text(&self.client),
            plate: normalize_plate(&self.plate),
            received_documents: normalize_text(&self.received_documents),
            notes: normalize_optional(self.notes),
        };
        form.validate()?;

        Ok(NewManagementRecord {
            client: form.client,
            plate: form.plate,
            received_documents: form.received_documents,
            notes: form.notes,
        })
    }
}
