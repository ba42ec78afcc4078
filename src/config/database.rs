//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Leer DATABASE_URL (obligatoria) y los tamaños del pool
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL must be set in environment variables"))?;
        let mut config = Self::new(url);

        if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = max
                .parse()
                .map_err(|_| anyhow!("DATABASE_MAX_CONNECTIONS must be a valid number"))?;
        }
        if let Ok(min) = env::var("DATABASE_MIN_CONNECTIONS") {
            config.min_connections = min
                .parse()
                .map_err(|_| anyhow!("DATABASE_MIN_CONNECTIONS must be a valid number"))?;
        }

        Ok(config)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}
