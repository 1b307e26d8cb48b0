//! Configuración de base de datos
//!
//! Este módulo maneja el pool de conexiones de PostgreSQL con SQLx.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

use super::environment::{parse_var, ConfigError};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self {
            url,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Leer los tamaños del pool de las variables de entorno
    pub fn from_env(url: String) -> Result<Self, ConfigError> {
        Self::from_lookup(url, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(url: String, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new(url);
        let acquire_secs = parse_var(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?;

        Ok(Self {
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            acquire_timeout: Duration::from_secs(acquire_secs),
            ..defaults
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_overrides() {
        let config = DatabaseConfig::from_lookup("postgres://localhost/db".to_string(), |key: &str| {
            match key {
                "DB_MAX_CONNECTIONS" => Some("25".to_string()),
                "DB_ACQUIRE_TIMEOUT_SECS" => Some("5".to_string()),
                _ => None,
            }
        })
        .unwrap();
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_pool_size() {
        let err = DatabaseConfig::from_lookup("postgres://localhost/db".to_string(), |key: &str| {
            (key == "DB_MIN_CONNECTIONS").then(|| "-1".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MIN_CONNECTIONS", .. }));
    }
}
