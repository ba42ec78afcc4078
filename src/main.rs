use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use gestoria_vehicular::cache::{FlashCache, RedisClient};
use gestoria_vehicular::config::{DatabaseConfig, EnvironmentConfig};
use gestoria_vehicular::database::DatabaseConnection;
use gestoria_vehicular::repositories::Repositories;
use gestoria_vehicular::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Gestoría Vehicular - Registro de vehículos y documentación");
    info!("================================================");
    info!("🔧 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.check_connection().await?;
    db_connection.run_migrations().await?;

    // Inicializar Redis para los avisos flash
    let redis_client = match RedisClient::new(config.cache_config()).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };
    let flash = Arc::new(FlashCache::new(redis_client));

    info!(
        "📄 Tamaño de página configurado: {} (los listados se devuelven completos)",
        config.items_per_page
    );

    let repositories = Repositories::postgres(db_connection.pool().clone());
    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(repositories, flash, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Redirige a /vehicles");
    info!("   GET  /health - Estado del servicio");
    info!("🚗 Vehículos:");
    info!("   GET  /vehicles - Listar (filtros: client, plate)");
    info!("   POST /vehicles - Agregar vehículo");
    info!("   POST /vehicles/:id/delete - Eliminar vehículo");
    info!("📋 Gestoría:");
    info!("   GET  /management-records - Listar (filtros: client, plate)");
    info!("   POST /management-records - Agregar registro");
    info!("   POST /management-records/:id/delete - Eliminar registro");
    info!("📦 Entregas de papeles:");
    info!("   GET  /document-handovers - Listar (filtros: client, plate)");
    info!("   POST /document-handovers - Agregar entrega");
    info!("   POST /document-handovers/:id/delete - Eliminar entrega");
    info!("🏛️ Papeles a retirar:");
    info!("   GET  /pending-pickups - Listar (filtros: client, plate, location)");
    info!("   POST /pending-pickups - Agregar registro");
    info!("   POST /pending-pickups/:id/delete - Eliminar registro");
    info!("🔎 API de autocompletado:");
    info!("   GET  /api/vehicles - Clientes y patentes");
    info!("   GET  /api/vehicles/:plate - Vehículo por patente");
    info!("🧹 Datos:");
    info!("   GET  /data/export - Conteo de registros");
    info!("   POST /data/clear - Limpiar datos (solo desarrollo)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
