//! API REST de personas y sus coches
//!
//! Capa HTTP (Axum) sobre dos tablas relacionadas, `persona` y `coche`.
//! El binario está en `main.rs`; la librería expone el router para que los
//! tests lo puedan montar sin abrir un puerto.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
