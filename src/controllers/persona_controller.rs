use std::sync::Arc;
use tracing::info;

use crate::dto::persona_dto::PersonaRequest;
use crate::models::{Coche, Persona};
use crate::repositories::PersonaRepository;
use crate::utils::errors::{AppError, AppResult};

pub const PERSONA_NO_ENCONTRADA: &str = "Persona no encontrada";

fn persona_no_encontrada() -> AppError {
    AppError::NotFound(PERSONA_NO_ENCONTRADA.to_string())
}

pub struct PersonaController {
    repository: Arc<dyn PersonaRepository>,
}

impl PersonaController {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: PersonaRequest) -> AppResult<Persona> {
        let persona = self.repository.create(&request).await?;
        info!("👤 Persona {} creada", persona.id);
        Ok(persona)
    }

    pub async fn list(&self) -> AppResult<Vec<Persona>> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Persona> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(persona_no_encontrada)
    }

    pub async fn update(&self, id: i32, request: PersonaRequest) -> AppResult<Persona> {
        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(persona_no_encontrada)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete_with_coches(id).await? {
            return Err(persona_no_encontrada());
        }
        info!("🗑️ Persona {} eliminada", id);
        Ok(())
    }

    pub async fn list_coches(&self, id: i32) -> AppResult<Vec<Coche>> {
        self.repository
            .find_coches(id)
            .await?
            .ok_or_else(persona_no_encontrada)
    }
}
