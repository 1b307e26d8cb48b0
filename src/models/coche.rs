//! Modelo de Coche
//!
//! Mapea a la tabla `coche`. La matrícula es la clave natural y
//! `persona_id` es una foreign key opcional hacia `persona.id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::persona::Persona;

/// Coche principal - mapea exactamente a la tabla coche
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Coche {
    pub matricula: String,
    pub marca: String,
    pub modelo: String,
    pub caballos: i32,
    pub persona_id: Option<i32>,
}

/// Resultado de buscar el propietario de un coche
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerLookup {
    /// No existe ningún coche con esa matrícula
    CocheNotFound,
    /// El coche existe pero `persona_id` es NULL
    SinPropietario,
    Propietario(Persona),
}
