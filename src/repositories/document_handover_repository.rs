use async_trait::async_trait;
use sqlx::PgPool;

use super::support::{delete_by_id, ListQuery};
use super::DocumentHandoverStore;
use crate::dto::ListFilters;
use crate::models::{DocumentHandover, NewDocumentHandover};
use crate::utils::errors::AppResult;

const HANDOVER_COLUMNS: &str =
    "id, client, plate, handover_date, delivered_documents, created_at";

pub struct DocumentHandoverRepository {
    pool: PgPool,
}

impl DocumentHandoverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentHandoverStore for DocumentHandoverRepository {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<DocumentHandover>> {
        let mut query = ListQuery::select(HANDOVER_COLUMNS, "document_handovers")
            .contains("client", filters.client.as_deref())
            .contains("plate", filters.plate.as_deref())
            .order_by("created_at DESC, id DESC")
            .into_builder();

        let handovers = query
            .build_query_as::<DocumentHandover>()
            .fetch_all(&self.pool)
            .await?;

        Ok(handovers)
    }

    async fn create(&self, handover: NewDocumentHandover) -> AppResult<DocumentHandover> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, DocumentHandover>(&format!(
            r#"
            INSERT INTO document_handovers (client, plate, handover_date, delivered_documents)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            HANDOVER_COLUMNS
        ))
        .bind(handover.client)
        .bind(handover.plate)
        .bind(handover.handover_date)
        .bind(handover.delivered_documents)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete_by_id(&self.pool, "document_handovers", "Entrega de papeles", id).await
    }
}
