use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Form, Router,
};

use super::responses::{create_outcome, delete_outcome, record_id, render_list};
use crate::controllers::PendingPickupController;
use crate::dto::pickup_dto::CreatePendingPickupForm;
use crate::dto::PickupFilters;
use crate::middleware::FlashSession;
use crate::state::AppState;

const PICKUPS_PATH: &str = "/pending-pickups";

pub fn create_pickup_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pickups).post(create_pickup))
        .route("/:id/delete", post(delete_pickup))
}

async fn list_pickups(
    State(state): State<AppState>,
    session: FlashSession,
    Query(filters): Query<PickupFilters>,
) -> Response {
    let filters = filters.normalized();
    let controller = PendingPickupController::new(state.repositories.pending_pickups.clone());
    let result = controller.list(&filters).await;
    render_list(&state, &session, result, filters, "Error al cargar papeles a retirar").await
}

async fn create_pickup(
    State(state): State<AppState>,
    session: FlashSession,
    Form(form): Form<CreatePendingPickupForm>,
) -> Response {
    let controller = PendingPickupController::new(state.repositories.pending_pickups.clone());
    let result = controller.create(form).await;
    create_outcome(
        &state,
        &session,
        PICKUPS_PATH,
        result,
        "Registro de papeles a retirar agregado correctamente",
        "Error al agregar el registro",
    )
    .await
}

async fn delete_pickup(
    State(state): State<AppState>,
    session: FlashSession,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let controller = PendingPickupController::new(state.repositories.pending_pickups.clone());
    let result = match record_id(id, "Registro de papeles a retirar") {
        Ok(id) => controller.delete(id).await,
        Err(e) => Err(e),
    };
    delete_outcome(
        &state,
        &session,
        PICKUPS_PATH,
        result,
        "Registro eliminado correctamente",
        "Error al eliminar el registro",
    )
    .await
}
