//! Sesión para mensajes flash
//!
//! La sesión es solo un identificador aleatorio en una cookie; los avisos
//! viven en el `FlashStore`. Si la petición no trae cookie válida se genera
//! un id nuevo y la respuesta lo devuelve en `Set-Cookie`.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "gestoria_session";

#[derive(Debug, Clone)]
pub struct FlashSession {
    id: String,
    is_new: bool,
    secure: bool,
}

impl FlashSession {
    /// Leer la sesión de las cabeceras o crear una nueva
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        match session_from_cookies(headers) {
            Some(id) => Self {
                id,
                is_new: false,
                secure,
            },
            None => Self {
                id: Uuid::new_v4().to_string(),
                is_new: true,
                secure,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Valor de la cabecera `Set-Cookie` para esta sesión
    pub fn cookie(&self) -> String {
        let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id);
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Adjuntar la cookie a la respuesta cuando la sesión es nueva
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.is_new {
            match HeaderValue::from_str(&self.cookie()) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => warn!("⚠️ Cookie de sesión inválida: {}", e),
            }
        }
        response
    }
}

#[async_trait]
impl FromRequestParts<AppState> for FlashSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(
            &parts.headers,
            state.config.session_cookie_secure,
        ))
    }
}

// Solo se aceptan UUIDs para no usar texto arbitrario como clave de Redis
fn session_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(|id| id.to_string())
}
