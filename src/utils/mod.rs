//! Utilidades del sistema
//!
//! Manejo de errores, validación y extractores comunes.

pub mod errors;
pub mod extract;
pub mod validation;
