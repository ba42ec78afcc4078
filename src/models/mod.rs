//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! a las cuatro tablas independientes del schema PostgreSQL.

pub mod document_handover;
pub mod management_record;
pub mod pending_pickup;
pub mod vehicle;

pub use document_handover::{DocumentHandover, NewDocumentHandover};
pub use management_record::{ManagementRecord, NewManagementRecord};
pub use pending_pickup::{NewPendingPickup, PendingPickup};
pub use vehicle::{NewVehicle, Vehicle, VehicleSummary};
