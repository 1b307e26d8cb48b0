//! Schema de PostgreSQL
//!
//! Sentencias idempotentes que se ejecutan al arrancar con el backend
//! PostgreSQL. El borrado en cascada lo hace el repositorio dentro de una
//! transacción, por eso la foreign key no lleva `ON DELETE CASCADE`.

pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS persona (
        id SERIAL PRIMARY KEY,
        nombre VARCHAR(100) NOT NULL,
        apellido1 VARCHAR(100) NOT NULL,
        apellido2 VARCHAR(100) NOT NULL,
        dni VARCHAR(20) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS coche (
        matricula VARCHAR(20) PRIMARY KEY,
        marca VARCHAR(100) NOT NULL,
        modelo VARCHAR(100) NOT NULL,
        caballos INTEGER NOT NULL,
        persona_id INTEGER REFERENCES persona (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_coche_persona_id ON coche (persona_id)",
];
