pub mod coche_controller;
pub mod persona_controller;

pub use coche_controller::CocheController;
pub use persona_controller::PersonaController;
