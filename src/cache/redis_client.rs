use anyhow::Result;
use redis::aio::ConnectionManager;
use tracing::{debug, info};

use super::CacheConfig;

/// Cliente Redis con connection manager async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
    config: CacheConfig,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager, config })
    }

    /// Generar clave de cache con prefijo
    fn make_key(&self, prefix: &str, identifier: &str) -> String {
        format!("gestoria:{}:{}", prefix, identifier)
    }

    /// Generar clave de la cola de avisos flash de una sesión
    pub fn flash_key(&self, session_id: &str) -> String {
        self.make_key("flash", session_id)
    }

    pub fn flash_ttl(&self) -> u64 {
        self.config.flash_ttl
    }

    /// Conexión multiplexada; clonar el manager es barato
    pub fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }

    /// Verificar si Redis está conectado
    pub async fn is_connected(&self) -> bool {
        let mut conn = self.manager.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) => {
                debug!("🏓 Redis PING: {}", response);
                response == "PONG"
            }
            Err(_) => false,
        }
    }
}
