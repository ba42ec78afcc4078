//! API JSON para el autocompletado de vehículos
//!
//! Único lugar que devuelve códigos 5xx al cliente.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::error;

use crate::controllers::VehicleController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lookup_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicle_summaries))
        .route("/vehicles/:plate", get(find_vehicle_by_plate))
}

async fn list_vehicle_summaries(State(state): State<AppState>) -> Response {
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    match controller.summaries().await {
        Ok(vehicles) => Json(json!({ "success": true, "vehicles": vehicles })).into_response(),
        Err(e) => failure(e),
    }
}

async fn find_vehicle_by_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Response {
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    match controller.lookup(&plate).await {
        Ok(vehicle) => Json(json!({ "success": true, "vehicle": vehicle })).into_response(),
        Err(e) => failure(e),
    }
}

fn failure(e: AppError) -> Response {
    let status = match &e {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            error!("❌ Error en API de vehículos: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let message = match &e {
        AppError::NotFound(msg) => msg.clone(),
        other => other.to_string(),
    };
    (status, Json(json!({ "success": false, "error": message }))).into_response()
}
