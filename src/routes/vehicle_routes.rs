use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Form, Router,
};

use super::responses::{create_outcome, delete_outcome, record_id, render_list};
use crate::controllers::VehicleController;
use crate::dto::vehicle_dto::CreateVehicleForm;
use crate::dto::ListFilters;
use crate::middleware::FlashSession;
use crate::state::AppState;

const VEHICLES_PATH: &str = "/vehicles";

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id/delete", post(delete_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    session: FlashSession,
    Query(filters): Query<ListFilters>,
) -> Response {
    let filters = filters.normalized();
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    let result = controller.list(&filters).await;
    render_list(&state, &session, result, filters, "Error al cargar vehículos").await
}

async fn create_vehicle(
    State(state): State<AppState>,
    session: FlashSession,
    Form(form): Form<CreateVehicleForm>,
) -> Response {
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    let result = controller.create(form).await;
    create_outcome(
        &state,
        &session,
        VEHICLES_PATH,
        result,
        "Vehículo agregado exitosamente",
        "Error al agregar vehículo",
    )
    .await
}

async fn delete_vehicle(
    State(state): State<AppState>,
    session: FlashSession,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    let result = match record_id(id, "Vehículo") {
        Ok(id) => controller.delete(id).await,
        Err(e) => Err(e),
    };
    delete_outcome(
        &state,
        &session,
        VEHICLES_PATH,
        result,
        "Vehículo eliminado exitosamente",
        "Error al eliminar vehículo",
    )
    .await
}
