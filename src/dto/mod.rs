//! DTOs de entrada y salida de la API

pub mod coche_dto;
pub mod persona_dto;

use serde::{Deserialize, Serialize};

// Response de confirmación para los DELETE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
