use async_trait::async_trait;
use sqlx::PgPool;

use super::support::{delete_by_id, ListQuery};
use super::PendingPickupStore;
use crate::dto::PickupFilters;
use crate::models::{NewPendingPickup, PendingPickup};
use crate::utils::errors::AppResult;

const PICKUP_COLUMNS: &str =
    "id, client, plate, registry_location, submission_date, comments, created_at";

pub struct PendingPickupRepository {
    pool: PgPool,
}

impl PendingPickupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PendingPickupStore for PendingPickupRepository {
    async fn list(&self, filters: &PickupFilters) -> AppResult<Vec<PendingPickup>> {
        let mut query = ListQuery::select(PICKUP_COLUMNS, "pending_pickups")
            .contains("client", filters.client.as_deref())
            .contains("registry_location", filters.location.as_deref())
            .contains("plate", filters.plate.as_deref())
            .order_by("submission_date DESC, id DESC")
            .into_builder();

        let pickups = query
            .build_query_as::<PendingPickup>()
            .fetch_all(&self.pool)
            .await?;

        Ok(pickups)
    }

    async fn create(&self, pickup: NewPendingPickup) -> AppResult<PendingPickup> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, PendingPickup>(&format!(
            r#"
            INSERT INTO pending_pickups (client, plate, registry_location, submission_date, comments)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            PICKUP_COLUMNS
        ))
        .bind(pickup.client)
        .bind(pickup.plate)
        .bind(pickup.registry_location)
        .bind(pickup.submission_date)
        .bind(pickup.comments)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete_by_id(&self.pool, "pending_pickups", "Registro de papeles a retirar", id).await
    }
}
