//! Almacenamiento en memoria
//!
//! Implementa los dos repositorios sobre un único `RwLock`, reproduciendo las
//! reglas que en PostgreSQL impone el schema: ids generados, matrícula única
//! y foreign key de `persona_id`. Cada operación toma el lock una sola vez,
//! así que el borrado en cascada es atómico.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{CocheRepository, PersonaRepository};
use crate::dto::coche_dto::{CreateCocheRequest, UpdateCocheRequest};
use crate::dto::persona_dto::PersonaRequest;
use crate::models::{Coche, OwnerLookup, Persona};
use crate::utils::errors::{duplicate_key_error, foreign_key_error, AppResult};

#[derive(Debug, Default)]
struct MemoryData {
    personas: BTreeMap<i32, Persona>,
    coches: BTreeMap<String, Coche>,
    last_id: i32,
}

impl MemoryData {
    fn check_owner(&self, persona_id: Option<i32>) -> AppResult<()> {
        match persona_id {
            Some(id) if !self.personas.contains_key(&id) => Err(foreign_key_error()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    data: Arc<RwLock<MemoryData>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonaRepository for MemoryRepository {
    async fn create(&self, request: &PersonaRequest) -> AppResult<Persona> {
        let mut data = self.data.write().await;
        data.last_id += 1;

        let persona = Persona {
            id: data.last_id,
            nombre: request.nombre.clone(),
            apellido1: request.apellido1.clone(),
            apellido2: request.apellido2.clone(),
            dni: request.dni.clone(),
        };
        data.personas.insert(persona.id, persona.clone());
        Ok(persona)
    }

    async fn find_all(&self) -> AppResult<Vec<Persona>> {
        let data = self.data.read().await;
        Ok(data.personas.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Persona>> {
        let data = self.data.read().await;
        Ok(data.personas.get(&id).cloned())
    }

    async fn update(&self, id: i32, request: &PersonaRequest) -> AppResult<Option<Persona>> {
        let mut data = self.data.write().await;

        Ok(data.personas.get_mut(&id).map(|persona| {
            persona.nombre = request.nombre.clone();
            persona.apellido1 = request.apellido1.clone();
            persona.apellido2 = request.apellido2.clone();
            persona.dni = request.dni.clone();
            persona.clone()
        }))
    }

    async fn delete_with_coches(&self, id: i32) -> AppResult<bool> {
        let mut data = self.data.write().await;

        if data.personas.remove(&id).is_none() {
            return Ok(false);
        }
        data.coches.retain(|_, coche| coche.persona_id != Some(id));
        Ok(true)
    }

    async fn find_coches(&self, id: i32) -> AppResult<Option<Vec<Coche>>> {
        let data = self.data.read().await;

        if !data.personas.contains_key(&id) {
            return Ok(None);
        }
        let coches = data
            .coches
            .values()
            .filter(|coche| coche.persona_id == Some(id))
            .cloned()
            .collect();
        Ok(Some(coches))
    }
}

#[async_trait]
impl CocheRepository for MemoryRepository {
    async fn create(&self, request: &CreateCocheRequest) -> AppResult<Coche> {
        let mut data = self.data.write().await;

        if data.coches.contains_key(&request.matricula) {
            return Err(duplicate_key_error());
        }
        data.check_owner(request.persona_id)?;

        let coche = Coche {
            matricula: request.matricula.clone(),
            marca: request.marca.clone(),
            modelo: request.modelo.clone(),
            caballos: request.caballos,
            persona_id: request.persona_id,
        };
        data.coches.insert(coche.matricula.clone(), coche.clone());
        Ok(coche)
    }

    async fn find_all(&self) -> AppResult<Vec<Coche>> {
        let data = self.data.read().await;
        Ok(data.coches.values().cloned().collect())
    }

    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Coche>> {
        let data = self.data.read().await;
        Ok(data.coches.get(matricula).cloned())
    }

    async fn update(
        &self,
        matricula: &str,
        request: &UpdateCocheRequest,
    ) -> AppResult<Option<Coche>> {
        let mut data = self.data.write().await;

        if !data.coches.contains_key(matricula) {
            return Ok(None);
        }
        data.check_owner(request.persona_id)?;

        Ok(data.coches.get_mut(matricula).map(|coche| {
            coche.marca = request.marca.clone();
            coche.modelo = request.modelo.clone();
            coche.caballos = request.caballos;
            coche.persona_id = request.persona_id;
            coche.clone()
        }))
    }

    async fn delete(&self, matricula: &str) -> AppResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.coches.remove(matricula).is_some())
    }

    async fn find_owner(&self, matricula: &str) -> AppResult<OwnerLookup> {
        let data = self.data.read().await;

        let Some(coche) = data.coches.get(matricula) else {
            return Ok(OwnerLookup::CocheNotFound);
        };

        Ok(coche
            .persona_id
            .and_then(|id| data.personas.get(&id))
            .cloned()
            .map_or(OwnerLookup::SinPropietario, OwnerLookup::Propietario))
    }
}
