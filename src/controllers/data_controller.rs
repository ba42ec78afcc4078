use std::sync::Arc;

use tracing::warn;

use crate::repositories::{MaintenanceStore, RecordCounts};
use crate::utils::errors::{AppError, AppResult};

pub struct DataController {
    repository: Arc<dyn MaintenanceStore>,
}

impl DataController {
    pub fn new(repository: Arc<dyn MaintenanceStore>) -> Self {
        Self { repository }
    }

    pub async fn export(&self) -> AppResult<RecordCounts> {
        self.repository.counts().await
    }

    /// Borra todas las tablas; solo se permite en desarrollo
    pub async fn clear(&self, development: bool) -> AppResult<RecordCounts> {
        if !development {
            warn!("⛔ Intento de limpiar datos fuera de desarrollo");
            return Err(AppError::Forbidden(
                "La limpieza de datos solo está disponible en desarrollo".to_string(),
            ));
        }
        self.repository.clear_all().await
    }

    pub async fn database_ready(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}

/// Texto del aviso de exportación
pub fn export_notice(counts: &RecordCounts) -> String {
    format!(
        "Datos exportados: {} registros totales (Vehículos: {}, Gestoría: {}, Entregas: {}, Papeles a retirar: {})",
        counts.total(),
        counts.vehicles,
        counts.management_records,
        counts.document_handovers,
        counts.pending_pickups
    )
}

/// Texto del aviso de limpieza
pub fn clear_notice(removed: &RecordCounts) -> String {
    format!(
        "Todos los datos han sido limpiados de la base de datos ({} registros eliminados)",
        removed.total()
    )
}
