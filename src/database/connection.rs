//! Configuración de conexión a PostgreSQL
//!
//! Este módulo abre el pool y crea el schema si todavía no existe.

use sqlx::PgPool;
use tracing::info;

use super::schema::SCHEMA;
use crate::config::DatabaseConfig;

/// Conexión a la base de datos ya inicializada
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!(
            "🔌 Conectando a PostgreSQL en {} (máx. {} conexiones)",
            mask_database_url(&config.url),
            config.max_connections
        );
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Crear las tablas `persona` y `coche` si no existen
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        ensure_schema(&self.pool).await
    }
}

/// Ejecutar las sentencias de `SCHEMA` sobre un pool cualquiera
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("✅ Schema verificado ({} sentencias)", SCHEMA.len());
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}***:***{}", &url[..scheme_end + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}
