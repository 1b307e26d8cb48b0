use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::PersonaRepository;
use crate::dto::persona_dto::PersonaRequest;
use crate::models::{Coche, Persona};
use crate::utils::errors::AppResult;

pub struct PgPersonaRepository {
    pool: PgPool,
}

impl PgPersonaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonaRepository for PgPersonaRepository {
    async fn create(&self, request: &PersonaRequest) -> AppResult<Persona> {
        let persona = sqlx::query_as::<_, Persona>(
            r#"
            INSERT INTO persona (nombre, apellido1, apellido2, dni)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, apellido1, apellido2, dni
            "#,
        )
        .bind(&request.nombre)
        .bind(&request.apellido1)
        .bind(&request.apellido2)
        .bind(&request.dni)
        .fetch_one(&self.pool)
        .await?;

        Ok(persona)
    }

    async fn find_all(&self) -> AppResult<Vec<Persona>> {
        let personas = sqlx::query_as::<_, Persona>(
            "SELECT id, nombre, apellido1, apellido2, dni FROM persona ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(personas)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Persona>> {
        let persona = sqlx::query_as::<_, Persona>(
            "SELECT id, nombre, apellido1, apellido2, dni FROM persona WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(persona)
    }

    async fn update(&self, id: i32, request: &PersonaRequest) -> AppResult<Option<Persona>> {
        let persona = sqlx::query_as::<_, Persona>(
            r#"
            UPDATE persona
            SET nombre = $2, apellido1 = $3, apellido2 = $4, dni = $5
            WHERE id = $1
            RETURNING id, nombre, apellido1, apellido2, dni
            "#,
        )
        .bind(id)
        .bind(&request.nombre)
        .bind(&request.apellido1)
        .bind(&request.apellido2)
        .bind(&request.dni)
        .fetch_optional(&self.pool)
        .await?;

        Ok(persona)
    }

    async fn delete_with_coches(&self, id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Bloquear la persona: un INSERT concurrente de un coche suyo espera al commit
        let existe: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM persona WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existe.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let coches = sqlx::query("DELETE FROM coche WHERE persona_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM persona WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "🗑️ Persona {} eliminada junto a {} coches",
            id,
            coches.rows_affected()
        );
        Ok(true)
    }

    async fn find_coches(&self, id: i32) -> AppResult<Option<Vec<Coche>>> {
        let mut tx = self.pool.begin().await?;

        let existe: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM persona WHERE id = $1 FOR SHARE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existe.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let coches = sqlx::query_as::<_, Coche>(
            r#"
            SELECT matricula, marca, modelo, caballos, persona_id
            FROM coche
            WHERE persona_id = $1
            ORDER BY matricula
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(coches))
    }
}
