use std::sync::Arc;

use tracing::{info, warn};

use crate::dto::vehicle_dto::{CreateVehicleForm, VehicleLookupResponse};
use crate::dto::ListFilters;
use crate::models::{Vehicle, VehicleSummary};
use crate::repositories::vehicle_repository::DUPLICATE_PLATE_MESSAGE;
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::normalize_plate;

pub struct VehicleController {
    repository: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleStore>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filters: &ListFilters) -> AppResult<Vec<Vehicle>> {
        self.repository.list(filters).await
    }

    pub async fn create(&self, form: CreateVehicleForm) -> AppResult<Vehicle> {
        let new_vehicle = form.into_new_vehicle()?;

        // Chequeo previo para un mensaje amable; la restricción UNIQUE decide en última instancia
        if self.repository.plate_exists(&new_vehicle.plate).await? {
            warn!("⚠️ Patente duplicada: {}", new_vehicle.plate);
            return Err(AppError::Duplicate(DUPLICATE_PLATE_MESSAGE.to_string()));
        }

        let vehicle = self.repository.create(new_vehicle).await?;
        info!("🚗 Vehículo creado: id={} patente={}", vehicle.id, vehicle.plate);
        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!("🗑️ Vehículo eliminado: id={}", id);
        Ok(())
    }

    pub async fn summaries(&self) -> AppResult<Vec<VehicleSummary>> {
        self.repository.list_summaries().await
    }

    /// Búsqueda exacta por patente, sin distinguir mayúsculas
    pub async fn lookup(&self, plate: &str) -> AppResult<VehicleLookupResponse> {
        let plate = normalize_plate(plate);
        self.repository
            .find_by_plate(&plate)
            .await?
            .map(VehicleLookupResponse::from)
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))
    }
}
