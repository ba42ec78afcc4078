//! Gestoría vehicular
//!
//! Servicio de registro para una oficina de gestoría: vehículos, papeles
//! recibidos, entregas de documentación y papeles a retirar de registros.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
