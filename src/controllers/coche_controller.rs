use std::sync::Arc;
use tracing::info;

use crate::dto::coche_dto::{CreateCocheRequest, UpdateCocheRequest};
use crate::models::{Coche, OwnerLookup, Persona};
use crate::repositories::CocheRepository;
use crate::utils::errors::{AppError, AppResult};

pub const COCHE_NO_ENCONTRADO: &str = "Coche no encontrado";

fn coche_no_encontrado() -> AppError {
    AppError::NotFound(COCHE_NO_ENCONTRADO.to_string())
}

pub struct CocheController {
    repository: Arc<dyn CocheRepository>,
}

impl CocheController {
    pub fn new(repository: Arc<dyn CocheRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateCocheRequest) -> AppResult<Coche> {
        let coche = self.repository.create(&request).await?;
        info!("🚗 Coche {} creado", coche.matricula);
        Ok(coche)
    }

    pub async fn list(&self) -> AppResult<Vec<Coche>> {
        self.repository.find_all().await
    }

    pub async fn get_by_matricula(&self, matricula: &str) -> AppResult<Coche> {
        self.repository
            .find_by_matricula(matricula)
            .await?
            .ok_or_else(coche_no_encontrado)
    }

    pub async fn update(&self, matricula: &str, request: UpdateCocheRequest) -> AppResult<Coche> {
        self.repository
            .update(matricula, &request)
            .await?
            .ok_or_else(coche_no_encontrado)
    }

    pub async fn delete(&self, matricula: &str) -> AppResult<()> {
        if !self.repository.delete(matricula).await? {
            return Err(coche_no_encontrado());
        }
        info!("🗑️ Coche {} eliminado", matricula);
        Ok(())
    }

    pub async fn get_owner(&self, matricula: &str) -> AppResult<Persona> {
        match self.repository.find_owner(matricula).await? {
            OwnerLookup::Propietario(persona) => Ok(persona),
            OwnerLookup::SinPropietario => Err(AppError::NoOwner(matricula.to_string())),
            OwnerLookup::CocheNotFound => Err(coche_no_encontrado()),
        }
    }
}
