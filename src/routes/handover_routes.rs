use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Form, Router,
};

use super::responses::{create_outcome, delete_outcome, record_id, render_list};
use crate::controllers::DocumentHandoverController;
use crate::dto::handover_dto::CreateDocumentHandoverForm;
use crate::dto::ListFilters;
use crate::middleware::FlashSession;
use crate::state::AppState;

const HANDOVERS_PATH: &str = "/document-handovers";

pub fn create_handover_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handovers).post(create_handover))
        .route("/:id/delete", post(delete_handover))
}

async fn list_handovers(
    State(state): State<AppState>,
    session: FlashSession,
    Query(filters): Query<ListFilters>,
) -> Response {
    let filters = filters.normalized();
    let controller = DocumentHandoverController::new(state.repositories.document_handovers.clone());
    let result = controller.list(&filters).await;
    render_list(&state, &session, result, filters, "Error al cargar entregas").await
}

async fn create_handover(
    State(state): State<AppState>,
    session: FlashSession,
    Form(form): Form<CreateDocumentHandoverForm>,
) -> Response {
    let controller = DocumentHandoverController::new(state.repositories.document_handovers.clone());
    let result = controller.create(form).await;
    create_outcome(
        &state,
        &session,
        HANDOVERS_PATH,
        result,
        "Entrega de papeles agregada exitosamente",
        "Error al agregar entrega",
    )
    .await
}

async fn delete_handover(
    State(state): State<AppState>,
    session: FlashSession,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let controller = DocumentHandoverController::new(state.repositories.document_handovers.clone());
    let result = match record_id(id, "Entrega de papeles") {
        Ok(id) => controller.delete(id).await,
        Err(e) => Err(e),
    };
    delete_outcome(
        &state,
        &session,
        HANDOVERS_PATH,
        result,
        "Entrega de papeles eliminada exitosamente",
        "Error al eliminar entrega",
    )
    .await
}
