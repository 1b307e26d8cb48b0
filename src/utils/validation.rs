//! Utilidades de validación
//!
//! Validadores personalizados usados por los DTOs a través de
//! `#[validate(custom = "...")]`.

use validator::ValidationError;

/// Validar que un string no esté vacío ni sea sólo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar una matrícula: se usa como segmento de URL, así que no puede
/// contener espacios ni barras.
pub fn validate_matricula(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;

    if value.chars().any(|c| c.is_whitespace() || c == '/') {
        let mut error = ValidationError::new("matricula");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
