//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja la conexión, la verificación y las migraciones.

use anyhow::Result;
use sqlx::PgPool;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Conexión a la base de datos (pool compartido)
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verificar que la conexión funciona
    pub async fn check_connection(&self) -> Result<()> {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => {
                info!("✅ Conexión a PostgreSQL exitosa");
                Ok(())
            }
            Err(e) => {
                error!("❌ Error de conexión a PostgreSQL: {}", e);
                error!("🔧 Verifica que PostgreSQL esté ejecutándose y que la base exista");
                Err(e.into())
            }
        }
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("🗄️  Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    if scheme_end + 3 > at_pos {
        return url.to_string();
    }

    let protocol = &url[..scheme_end + 3];
    let host = &url[at_pos + 1..];
    format!("{}***:***@{}", protocol, host)
}
