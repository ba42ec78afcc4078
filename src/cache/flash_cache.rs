//! Mensajes flash
//!
//! Un aviso se guarda en una petición y se consume en la siguiente. Cada
//! sesión tiene una lista en Redis con TTL; leerla la borra en la misma
//! transacción MULTI/EXEC.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::redis_client::RedisClient;
use crate::dto::FlashMessage;

/// Almacén de avisos de un solo uso por sesión
#[async_trait]
pub trait FlashStore: Send + Sync {
    async fn push(&self, session_id: &str, message: FlashMessage) -> Result<()>;

    /// Devuelve los avisos pendientes y los elimina
    async fn take(&self, session_id: &str) -> Result<Vec<FlashMessage>>;

    async fn is_healthy(&self) -> bool;
}

/// Cache de avisos flash sobre Redis
#[derive(Clone)]
pub struct FlashCache {
    redis: RedisClient,
}

impl FlashCache {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl FlashStore for FlashCache {
    async fn push(&self, session_id: &str, message: FlashMessage) -> Result<()> {
        let key = self.redis.flash_key(session_id);
        let serialized = serde_json::to_string(&message)?;
        let mut conn = self.redis.connection();

        redis::pipe()
            .atomic()
            .cmd("RPUSH")
            .arg(&key)
            .arg(serialized)
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(self.redis.flash_ttl())
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;

        debug!("💾 Aviso flash guardado para sesión {}", session_id);
        Ok(())
    }

    async fn take(&self, session_id: &str) -> Result<Vec<FlashMessage>> {
        let key = self.redis.flash_key(session_id);
        let mut conn = self.redis.connection();

        let (raw,): (Vec<String>,) = redis::pipe()
            .atomic()
            .cmd("LRANGE")
            .arg(&key)
            .arg(0)
            .arg(-1)
            .cmd("DEL")
            .arg(&key)
            .ignore()
            .query_async(&mut conn)
            .await?;

        let messages = raw
            .iter()
            .filter_map(|value| match serde_json::from_str::<FlashMessage>(value) {
                Ok(message) => Some(message),
                Err(e) => {
                    warn!("⚠️ Aviso flash ilegible descartado: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>();

        if !messages.is_empty() {
            debug!("📥 {} avisos flash consumidos para sesión {}", messages.len(), session_id);
        }
        Ok(messages)
    }

    async fn is_healthy(&self) -> bool {
        self.redis.is_connected().await
    }
}
