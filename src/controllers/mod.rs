//! Controladores
//!
//! Reglas de negocio por entidad: normalización, validación y unicidad
//! antes de llegar a los repositorios.

pub mod data_controller;
pub mod handover_controller;
pub mod management_controller;
pub mod pickup_controller;
pub mod vehicle_controller;

pub use data_controller::DataController;
pub use handover_controller::DocumentHandoverController;
pub use management_controller::ManagementRecordController;
pub use pickup_controller::PendingPickupController;
pub use vehicle_controller::VehicleController;
