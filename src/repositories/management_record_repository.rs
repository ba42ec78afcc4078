use async_trait::async_trait;
use sqlx::PgPool;

use super::support::{delete_by_id, ListQuery};
use super::ManagementRecordStore;
use crate::dto::ListFilters;
use crate::models::{ManagementRecord, NewManagementRecord};
use crate::utils::errors::AppResult;

const MANAGEMENT_COLUMNS: &str = "id, client, plate, received_documents, notes, created_at";

pub struct ManagementRecordRepository {
    pool: PgPool,
}

impl ManagementRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagementRecordStore for ManagementRecordRepository {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<ManagementRecord>> {
        let mut query = ListQuery::select(MANAGEMENT_COLUMNS, "management_records")
            .contains("client", filters.client.as_deref())
            .contains("plate", filters.plate.as_deref())
            .order_by("created_at DESC, id DESC")
            .into_builder();

        let records = query
            .build_query_as::<ManagementRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn create(&self, record: NewManagementRecord) -> AppResult<ManagementRecord> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, ManagementRecord>(&format!(
            r#"
            INSERT INTO management_records (client, plate, received_documents, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            MANAGEMENT_COLUMNS
        ))
        .bind(record.client)
        .bind(record.plate)
        .bind(record.received_documents)
        .bind(record.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete_by_id(&self.pool, "management_records", "Gestoría", id).await
    }
}
