//! Modelo de Persona
//!
//! Mapea exactamente a la tabla `persona` con primary key 'id' generada.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persona principal - posible propietaria de cero o más coches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Persona {
    pub id: i32,
    pub nombre: String,
    pub apellido1: String,
    pub apellido2: String,
    pub dni: String,
}
