use std::sync::Arc;

use tracing::info;

use crate::dto::management_dto::CreateManagementRecordForm;
use crate::dto::ListFilters;
use crate::models::ManagementRecord;
use crate::repositories::ManagementRecordStore;
use crate::utils::errors::AppResult;

pub struct ManagementRecordController {
    repository: Arc<dyn ManagementRecordStore>,
}

impl ManagementRecordController {
    pub fn new(repository: Arc<dyn ManagementRecordStore>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filters: &ListFilters) -> AppResult<Vec<ManagementRecord>> {
        self.repository.list(filters).await
    }

    pub async fn create(&self, form: CreateManagementRecordForm) -> AppResult<ManagementRecord> {
        let record = self.repository.create(form.into_new_record()?).await?;
        info!("📁 Gestoría creada: id={} patente={}", record.id, record.plate);
        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!("🗑️ Gestoría eliminada: id={}", id);
        Ok(())
    }
}
