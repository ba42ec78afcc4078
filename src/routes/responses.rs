//! Respuestas compartidas por los grupos de rutas
//!
//! Los listados siempre responden algo (un fallo de lectura se convierte en
//! lista vacía más un aviso) y las escrituras redirigen al listado con un
//! aviso de un solo uso.

use axum::extract::{rejection::PathRejection, Path};
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::dto::{FlashMessage, ListView};
use crate::middleware::FlashSession;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Consumir los avisos pendientes de la sesión.
///
/// Si el almacén de avisos falla, la vista recibe un aviso de error en su lugar.
pub async fn take_notices(state: &AppState, session: &FlashSession) -> Vec<FlashMessage> {
    if session.is_new() {
        return Vec::new();
    }
    match state.flash.take(session.id()).await {
        Ok(notices) => notices,
        Err(e) => {
            let err = AppError::Internal(e.to_string());
            warn!("⚠️ No se pudieron leer los avisos flash: {}", err);
            vec![FlashMessage::error(err.notice("Error al leer avisos"))]
        }
    }
}

/// Id numérico de la ruta `/:id/delete`.
///
/// Un id no numérico o fuera de rango no puede existir: se trata como no encontrado.
pub fn record_id(path: Result<Path<i32>, PathRejection>, resource: &str) -> AppResult<i32> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!("🔍 Id de {} inválido: {}", resource, rejection.body_text());
            Err(AppError::NotFound(format!("{} no encontrado", resource)))
        }
    }
}

/// Vista de listado: registros, filtros usados y avisos
pub async fn render_list<T, F>(
    state: &AppState,
    session: &FlashSession,
    result: AppResult<Vec<T>>,
    filters: F,
    context: &str,
) -> Response
where
    T: Serialize,
    F: Serialize,
{
    let mut notices = take_notices(state, session).await;

    let items = match result {
        Ok(items) => items,
        Err(e) => {
            error!("❌ {}: {}", context, e);
            notices.push(FlashMessage::error(e.notice(context)));
            Vec::new()
        }
    };

    session.attach(Json(ListView {
        items,
        filters,
        notices,
    }))
}

/// Guardar el aviso y redirigir (303) al listado de origen
pub async fn redirect_with_notice(
    state: &AppState,
    session: &FlashSession,
    location: &str,
    notice: FlashMessage,
) -> Response {
    // Sin almacén de avisos la redirección sigue adelante; el aviso queda en el log
    if let Err(e) = state.flash.push(session.id(), notice.clone()).await {
        let err = AppError::Internal(e.to_string());
        error!("❌ Aviso flash descartado '{}': {}", notice.message, err);
    }
    session.attach(Redirect::to(location))
}

/// Resultado de un alta: aviso de éxito o de error y redirección
pub async fn create_outcome<T>(
    state: &AppState,
    session: &FlashSession,
    location: &str,
    result: AppResult<T>,
    success: &str,
    context: &str,
) -> Response {
    let notice = match result {
        Ok(_) => FlashMessage::success(success),
        Err(e) => {
            warn!("⚠️ {}: {}", context, e);
            FlashMessage::error(e.notice(context))
        }
    };
    redirect_with_notice(state, session, location, notice).await
}

/// Resultado de un borrado. Un id inexistente responde 404 sin aviso.
pub async fn delete_outcome(
    state: &AppState,
    session: &FlashSession,
    location: &str,
    result: AppResult<()>,
    success: &str,
    context: &str,
) -> Response {
    match result {
        Ok(()) => redirect_with_notice(state, session, location, FlashMessage::success(success)).await,
        Err(e @ AppError::NotFound(_)) => session.attach(e.into_response()),
        Err(e) => {
            error!("❌ {}: {}", context, e);
            redirect_with_notice(state, session, location, FlashMessage::error(e.notice(context))).await
        }
    }
}
