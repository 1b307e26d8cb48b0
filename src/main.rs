use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use personas_coches_api::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use personas_coches_api::database::DatabaseConnection;
use personas_coches_api::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 API Personas y Coches");
    info!("========================");
    info!("🔧 Entorno: {} | almacenamiento: {}", config.environment, config.storage);

    let app_state = match config.storage {
        StorageBackend::Postgres => {
            // from_lookup ya garantiza DATABASE_URL con este backend
            let url = config.database_url.clone().unwrap_or_default();
            let db_config = DatabaseConfig::from_env(url)?;

            let db_connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            db_connection.ensure_schema().await?;

            AppState::postgres(db_connection.pool().clone(), config.clone())
        }
        StorageBackend::Memory => {
            warn!("⚠️ Usando almacenamiento en memoria: los datos se pierden al reiniciar");
            AppState::in_memory(config.clone())
        }
    };

    let app = create_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor corriendo en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Estado del servicio");
    info!("👤 Personas:");
    info!("   POST   /api/personas - Crear persona");
    info!("   GET    /api/personas - Listar personas");
    info!("   GET    /api/personas/:id - Obtener persona");
    info!("   PUT    /api/personas/:id - Reemplazar persona");
    info!("   DELETE /api/personas/:id - Eliminar persona y sus coches");
    info!("   GET    /api/personas/:id/coches - Coches de una persona");
    info!("🚗 Coches:");
    info!("   POST   /api/coches - Crear coche");
    info!("   GET    /api/coches - Listar coches");
    info!("   GET    /api/coches/:matricula - Obtener coche");
    info!("   PUT    /api/coches/:matricula - Actualizar coche");
    info!("   DELETE /api/coches/:matricula - Eliminar coche");
    info!("   GET    /api/coches/:matricula/persona - Propietario del coche");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
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
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
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
