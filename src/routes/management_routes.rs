use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Form, Router,
};

use super::responses::{create_outcome, delete_outcome, record_id, render_list};
use crate::controllers::ManagementRecordController;
use crate::dto::management_dto::CreateManagementRecordForm;
use crate::dto::ListFilters;
use crate::middleware::FlashSession;
use crate::state::AppState;

const MANAGEMENT_PATH: &str = "/management-records";

pub fn create_management_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id/delete", post(delete_record))
}

async fn list_records(
    State(state): State<AppState>,
    session: FlashSession,
    Query(filters): Query<ListFilters>,
) -> Response {
    let filters = filters.normalized();
    let controller = ManagementRecordController::new(state.repositories.management_records.clone());
    let result = controller.list(&filters).await;
    render_list(&state, &session, result, filters, "Error al cargar gestoría").await
}

async fn create_record(
    State(state): State<AppState>,
    session: FlashSession,
    Form(form): Form<CreateManagementRecordForm>,
) -> Response {
    let controller = ManagementRecordController::new(state.repositories.management_records.clone());
    let result = controller.create(form).await;
    create_outcome(
        &state,
        &session,
        MANAGEMENT_PATH,
        result,
        "Gestoría agregada exitosamente",
        "Error al agregar gestoría",
    )
    .await
}

async fn delete_record(
    State(state): State<AppState>,
    session: FlashSession,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let controller = ManagementRecordController::new(state.repositories.management_records.clone());
    let result = match record_id(id, "Gestoría") {
        Ok(id) => controller.delete(id).await,
        Err(e) => Err(e),
    };
    delete_outcome(
        &state,
        &session,
        MANAGEMENT_PATH,
        result,
        "Gestoría eliminada exitosamente",
        "Error al eliminar gestoría",
    )
    .await
}
