use std::sync::Arc;

use tracing::info;

use crate::dto::handover_dto::CreateDocumentHandoverForm;
use crate::dto::ListFilters;
use crate::models::DocumentHandover;
use crate::repositories::DocumentHandoverStore;
use crate::utils::errors::AppResult;

pub struct DocumentHandoverController {
    repository: Arc<dyn DocumentHandoverStore>,
}

impl DocumentHandoverController {
    pub fn new(repository: Arc<dyn DocumentHandoverStore>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filters: &ListFilters) -> AppResult<Vec<DocumentHandover>> {
        self.repository.list(filters).await
    }

    pub async fn create(&self, form: CreateDocumentHandoverForm) -> AppResult<DocumentHandover> {
        let handover = self.repository.create(form.into_new_handover()?).await?;
        info!(
            "📄 Entrega registrada: id={} patente={} fecha={}",
            handover.id, handover.plate, handover.handover_date
        );
        Ok(handover)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        info!("🗑️ Entrega eliminada: id={}", id);
        Ok(())
    }
}
