//! DTOs de presentación
//!
//! Las vistas de listado devuelven los registros junto con los filtros
//! usados y los avisos pendientes, para que la capa de presentación
//! pueda rellenar el formulario de búsqueda sin estado propio.

use serde::{Deserialize, Serialize};

/// Categoría de un aviso flash
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

/// Aviso de un solo uso: se guarda en una petición y se muestra en la siguiente
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Vista de listado genérica
#[derive(Debug, Serialize)]
pub struct ListView<T, F> {
    pub items: Vec<T>,
    pub filters: F,
    pub notices: Vec<FlashMessage>,
}
