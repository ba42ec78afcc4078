//! Rutas HTTP
//!
//! Un grupo de rutas por entidad (listar, crear, borrar), la API JSON de
//! autocompletado y el mantenimiento de datos.

pub mod data_routes;
pub mod handover_routes;
pub mod lookup_routes;
pub mod management_routes;
pub mod pickup_routes;
pub mod responses;
pub mod vehicle_routes;

use axum::{response::Redirect, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let api = lookup_routes::create_lookup_router()
        .layer(cors_middleware(&state.config.cors_origins));

    Router::new()
        .route("/", get(|| async { Redirect::to("/vehicles") }))
        .route("/health", get(data_routes::health_check))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/management-records", management_routes::create_management_router())
        .nest("/document-handovers", handover_routes::create_handover_router())
        .nest("/pending-pickups", pickup_routes::create_pickup_router())
        .nest("/data", data_routes::create_data_router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
