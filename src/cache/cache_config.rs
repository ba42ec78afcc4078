//! Configuración de cache
//!
//! Este módulo contiene la configuración de Redis, usado para los
//! mensajes flash entre peticiones.

use serde::{Deserialize, Serialize};

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    /// Segundos que sobrevive un aviso flash no leído
    pub flash_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            flash_ttl: 300, // 5 minutos
        }
    }
}
