//! Mantenimiento de datos: exportación (conteos) y limpieza para desarrollo

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::responses::redirect_with_notice;
use crate::controllers::data_controller::{clear_notice, export_notice, DataController};
use crate::dto::FlashMessage;
use crate::middleware::FlashSession;
use crate::state::AppState;
use crate::utils::errors::AppError;

const HOME_PATH: &str = "/vehicles";

pub fn create_data_router() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_data))
        .route("/clear", post(clear_data))
}

async fn export_data(State(state): State<AppState>, session: FlashSession) -> Response {
    let controller = DataController::new(state.repositories.maintenance.clone());
    let notice = match controller.export().await {
        Ok(counts) => FlashMessage::success(export_notice(&counts)),
        Err(e) => FlashMessage::error(e.notice("Error al exportar datos")),
    };
    redirect_with_notice(&state, &session, HOME_PATH, notice).await
}

async fn clear_data(State(state): State<AppState>, session: FlashSession) -> Response {
    let controller = DataController::new(state.repositories.maintenance.clone());
    let notice = match controller.clear(state.config.is_development()).await {
        Ok(removed) => FlashMessage::success(clear_notice(&removed)),
        Err(e @ AppError::Forbidden(_)) => return session.attach(e.into_response()),
        Err(e) => FlashMessage::error(e.notice("Error al limpiar datos")),
    };
    redirect_with_notice(&state, &session, HOME_PATH, notice).await
}

/// Estado del servicio: base de datos y almacén de avisos
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let controller = DataController::new(state.repositories.maintenance.clone());
    let database = controller.database_ready().await;
    let flash = state.flash.is_healthy().await;

    Json(json!({
        "status": if database && flash { "ok" } else { "degraded" },
        "database": database,
        "flash_store": flash,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
