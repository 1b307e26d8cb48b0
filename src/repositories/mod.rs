//! Repositorios de acceso a datos
//!
//! Los controladores sólo conocen estos traits. Hay dos implementaciones:
//! PostgreSQL (`PgPersonaRepository`, `PgCocheRepository`) y una en memoria
//! (`MemoryRepository`) con la misma semántica.

use async_trait::async_trait;

use crate::dto::coche_dto::{CreateCocheRequest, UpdateCocheRequest};
use crate::dto::persona_dto::PersonaRequest;
use crate::models::{Coche, OwnerLookup, Persona};
use crate::utils::errors::AppResult;

pub mod coche_repository;
pub mod memory;
pub mod persona_repository;

pub use coche_repository::PgCocheRepository;
pub use memory::MemoryRepository;
pub use persona_repository::PgPersonaRepository;

#[async_trait]
pub trait PersonaRepository: Send + Sync {
    async fn create(&self, request: &PersonaRequest) -> AppResult<Persona>;

    async fn find_all(&self) -> AppResult<Vec<Persona>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Persona>>;

    /// Reemplaza los cuatro campos. `None` si no existe la persona.
    async fn update(&self, id: i32, request: &PersonaRequest) -> AppResult<Option<Persona>>;

    /// Borra la persona y todos sus coches de forma atómica.
    /// Devuelve `false` si la persona no existía (y no se toca nada).
    async fn delete_with_coches(&self, id: i32) -> AppResult<bool>;

    /// Coches de una persona. `None` si la persona no existe.
    async fn find_coches(&self, id: i32) -> AppResult<Option<Vec<Coche>>>;
}

#[async_trait]
pub trait CocheRepository: Send + Sync {
    async fn create(&self, request: &CreateCocheRequest) -> AppResult<Coche>;

    async fn find_all(&self) -> AppResult<Vec<Coche>>;

    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Coche>>;

    async fn update(
        &self,
        matricula: &str,
        request: &UpdateCocheRequest,
    ) -> AppResult<Option<Coche>>;

    async fn delete(&self, matricula: &str) -> AppResult<bool>;

    async fn find_owner(&self, matricula: &str) -> AppResult<OwnerLookup>;
}
