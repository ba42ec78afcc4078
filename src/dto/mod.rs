//! DTOs de entrada y salida
//!
//! Formularios de alta, filtros de búsqueda y vistas de listado.

pub mod filter_dto;
pub mod handover_dto;
pub mod management_dto;
pub mod pickup_dto;
pub mod vehicle_dto;
pub mod view_dto;

pub use filter_dto::{ListFilters, PickupFilters};
pub use view_dto::{FlashCategory, FlashMessage, ListView};
