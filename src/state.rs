//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El acceso a datos se inyecta aquí: los
//! handlers nunca abren conexiones por su cuenta.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::{EnvironmentConfig, StorageBackend};
use crate::repositories::{
    CocheRepository, MemoryRepository, PersonaRepository, PgCocheRepository,
    PgPersonaRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub personas: Arc<dyn PersonaRepository>,
    pub coches: Arc<dyn CocheRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        personas: Arc<dyn PersonaRepository>,
        coches: Arc<dyn CocheRepository>,
    ) -> Self {
        Self {
            config,
            personas,
            coches,
        }
    }

    /// Estado respaldado por PostgreSQL
    pub fn postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::new(
            EnvironmentConfig {
                storage: StorageBackend::Postgres,
                ..config
            },
            Arc::new(PgPersonaRepository::new(pool.clone())),
            Arc::new(PgCocheRepository::new(pool)),
        )
    }

    /// Estado con los datos en memoria; ambos repositorios comparten almacén
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        let repository = MemoryRepository::new();
        Self::new(
            EnvironmentConfig {
                storage: StorageBackend::Memory,
                ..config
            },
            Arc::new(repository.clone()),
            Arc::new(repository),
        )
    }
}
