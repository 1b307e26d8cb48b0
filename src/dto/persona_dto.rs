use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar una persona (PUT reemplaza los cuatro campos)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonaRequest {
    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub nombre: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub apellido1: String,

    #[validate(length(max = 100))]
    pub apellido2: String,

    #[validate(length(max = 20), custom = "validate_not_blank")]
    pub dni: String,
}
