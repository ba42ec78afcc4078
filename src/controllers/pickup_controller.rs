use std::sync::Arc;

use tracing::info;

use crate::dto::pickup_dto::CreatePendingPickupForm;
use crate::dto::PickupFilters;
use crate::models::PendingPickup;
use crate::repositories::PendingPickupStore;
use crate::utils::errors::AppResult;

pub struct PendingPickupController {
    repository: Arc<dyn PendingPickupStore>,
}

impl PendingPickupController {
    pub fn new(repository: Arc<dyn PendingPickupStore>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filters: &PickupFilters) -> AppResult<Vec<PendingPickup>> {
        self.repository.list(filters).await
    }

    pub async fn create(&self, form: CreatePendingPickupForm) -> AppResult<PendingPickup> {
        let pickup = self.repository.create(form.into_new_pickup()?).await?;
        info!(
            "🏛️ Papeles a retirar registrados: id={} lugar={}",
            pickup.id, pickup.registry_location
        );
        Ok(pickup)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!("🗑️ Registro de papeles a retirar eliminado: id={}", id);
        Ok(())
    }
}
