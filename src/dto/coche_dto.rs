use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_matricula, validate_not_blank};

// Request para crear un coche
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCocheRequest {
    #[validate(length(max = 20), custom = "validate_matricula")]
    pub matricula: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub marca: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub modelo: String,

    #[validate(range(min = 0))]
    pub caballos: i32,

    pub persona_id: Option<i32>,
}

// Request para actualizar un coche (la matrícula viene en la ruta)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCocheRequest {
    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub marca: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub modelo: String,

    #[validate(range(min = 0))]
    pub caballos: i32,

    pub persona_id: Option<i32>,
}
