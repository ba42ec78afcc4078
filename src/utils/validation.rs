//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de los campos de formulario.

use chrono::NaiveDate;
use validator::ValidationError;

/// Formato de fecha de los formularios (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validar y convertir string a fecha
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validador para `#[validate(custom = ...)]` sobre campos de fecha
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value).map(|_| ())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar una patente: sin espacios alrededor y en mayúsculas
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Normalizar texto libre obligatorio
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Campos opcionales: en blanco se guarda NULL, nunca ""
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
