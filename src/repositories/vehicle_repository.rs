use async_trait::async_trait;
use sqlx::PgPool;

use super::support::{delete_by_id, ListQuery};
use super::VehicleStore;
use crate::dto::ListFilters;
use crate::models::{NewVehicle, Vehicle, VehicleSummary};
use crate::utils::errors::{map_unique_violation, AppResult};

const VEHICLE_COLUMNS: &str = "id, client, model, purchase_location, color, plate, created_at";

pub const DUPLICATE_PLATE_MESSAGE: &str = "La patente ya existe en el sistema";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<Vehicle>> {
        let mut query = ListQuery::select(VEHICLE_COLUMNS, "vehicles")
            .contains("client", filters.client.as_deref())
            .contains("plate", filters.plate.as_deref())
            .order_by("created_at DESC, id DESC")
            .into_builder();

        let vehicles = query
            .build_query_as::<Vehicle>()
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn plate_exists(&self, plate: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles (client, model, purchase_location, color, plate)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vehicle.client)
        .bind(vehicle.model)
        .bind(vehicle.purchase_location)
        .bind(vehicle.color)
        .bind(vehicle.plate)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PLATE_MESSAGE))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete_by_id(&self.pool, "vehicles", "Vehículo", id).await
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE plate = $1",
            VEHICLE_COLUMNS
        ))
        .bind(plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn list_summaries(&self) -> AppResult<Vec<VehicleSummary>> {
        let summaries = sqlx::query_as::<_, VehicleSummary>(
            "SELECT client, plate FROM vehicles ORDER BY client, plate",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }
}
