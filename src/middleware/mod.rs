//! Middleware
//!
//! CORS para la API JSON y la sesión que identifica los mensajes flash.

pub mod cors;
pub mod session;

pub use session::FlashSession;
