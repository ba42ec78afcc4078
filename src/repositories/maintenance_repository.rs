//! Mantenimiento de datos
//!
//! Conteo de registros (exportación) y limpieza completa para desarrollo.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use super::MaintenanceStore;
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct RecordCounts {
    pub vehicles: i64,
    pub management_records: i64,
    pub document_handovers: i64,
    pub pending_pickups: i64,
}

impl RecordCounts {
    pub fn total(&self) -> i64 {
        self.vehicles + self.management_records + self.document_handovers + self.pending_pickups
    }
}

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceStore for MaintenanceRepository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn counts(&self) -> AppResult<RecordCounts> {
        let (vehicles, management_records, document_handovers, pending_pickups): (
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM vehicles),
                (SELECT COUNT(*) FROM management_records),
                (SELECT COUNT(*) FROM document_handovers),
                (SELECT COUNT(*) FROM pending_pickups)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(RecordCounts {
            vehicles,
            management_records,
            document_handovers,
            pending_pickups,
        })
    }

    async fn clear_all(&self) -> AppResult<RecordCounts> {
        let mut tx = self.pool.begin().await?;
        let mut deleted = RecordCounts::default();

        deleted.vehicles = sqlx::query("DELETE FROM vehicles")
            .execute(&mut *tx)
            .await?
            .rows_affected() as i64;
        deleted.management_records = sqlx::query("DELETE FROM management_records")
            .execute(&mut *tx)
            .await?
            .rows_affected() as i64;
        deleted.document_handovers = sqlx::query("DELETE FROM document_handovers")
            .execute(&mut *tx)
            .await?
            .rows_affected() as i64;
        deleted.pending_pickups = sqlx::query("DELETE FROM pending_pickups")
            .execute(&mut *tx)
            .await?
            .rows_affected() as i64;

        tx.commit().await?;
        info!("🧹 Datos limpiados: {} registros eliminados", deleted.total());
        Ok(deleted)
    }
}
