//! Modelos del sistema
//!
//! Structs que mapean exactamente al schema PostgreSQL.

pub mod coche;
pub mod persona;

pub use coche::{Coche, OwnerLookup};
pub use persona::Persona;
