//! Repositorios
//!
//! Cada entidad se accede a través de un trait de almacenamiento; la
//! implementación de producción usa PostgreSQL con SQLx. El estado de la
//! aplicación guarda los traits como objetos para poder sustituirlos.

pub mod document_handover_repository;
pub mod maintenance_repository;
pub mod management_record_repository;
pub mod pending_pickup_repository;
pub mod support;
pub mod vehicle_repository;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::{ListFilters, PickupFilters};
use crate::models::{
    DocumentHandover, ManagementRecord, NewDocumentHandover, NewManagementRecord,
    NewPendingPickup, NewVehicle, PendingPickup, Vehicle, VehicleSummary,
};
use crate::utils::errors::AppResult;

pub use document_handover_repository::DocumentHandoverRepository;
pub use maintenance_repository::{MaintenanceRepository, RecordCounts};
pub use management_record_repository::ManagementRecordRepository;
pub use pending_pickup_repository::PendingPickupRepository;
pub use vehicle_repository::VehicleRepository;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Listado filtrado, más reciente primero
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<Vehicle>>;
    async fn plate_exists(&self, plate: &str) -> AppResult<bool>;
    /// Inserta; una patente repetida devuelve `AppError::Duplicate`
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;
    /// Borra por id; `AppError::NotFound` si no existe
    async fn delete(&self, id: i32) -> AppResult<()>;
    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>>;
    async fn list_summaries(&self) -> AppResult<Vec<VehicleSummary>>;
}

#[async_trait]
pub trait ManagementRecordStore: Send + Sync {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<ManagementRecord>>;
    async fn create(&self, record: NewManagementRecord) -> AppResult<ManagementRecord>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[async_trait]
pub trait DocumentHandoverStore: Send + Sync {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<DocumentHandover>>;
    async fn create(&self, handover: NewDocumentHandover) -> AppResult<DocumentHandover>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[async_trait]
pub trait PendingPickupStore: Send + Sync {
    /// Ordenado por fecha de presentación, más reciente primero
    async fn list(&self, filters: &PickupFilters) -> AppResult<Vec<PendingPickup>>;
    async fn create(&self, pickup: NewPendingPickup) -> AppResult<PendingPickup>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Operaciones sobre todas las tablas a la vez
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
    async fn counts(&self) -> AppResult<RecordCounts>;
    async fn clear_all(&self) -> AppResult<RecordCounts>;
}

/// Conjunto de repositorios compartido por los handlers
#[derive(Clone)]
pub struct Repositories {
    pub vehicles: Arc<dyn VehicleStore>,
    pub management_records: Arc<dyn ManagementRecordStore>,
    pub document_handovers: Arc<dyn DocumentHandoverStore>,
    pub pending_pickups: Arc<dyn PendingPickupStore>,
    pub maintenance: Arc<dyn MaintenanceStore>,
}

impl Repositories {
    /// Repositorios PostgreSQL sobre un mismo pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            vehicles: Arc::new(VehicleRepository::new(pool.clone())),
            management_records: Arc::new(ManagementRecordRepository::new(pool.clone())),
            document_handovers: Arc::new(DocumentHandoverRepository::new(pool.clone())),
            pending_pickups: Arc::new(PendingPickupRepository::new(pool.clone())),
            maintenance: Arc::new(MaintenanceRepository::new(pool)),
        }
    }
}
