use async_trait::async_trait;
use sqlx::PgPool;

use super::CocheRepository;
use crate::dto::coche_dto::{CreateCocheRequest, UpdateCocheRequest};
use crate::models::{Coche, OwnerLookup, Persona};
use crate::utils::errors::AppResult;

pub struct PgCocheRepository {
    pool: PgPool,
}

impl PgCocheRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CocheRepository for PgCocheRepository {
    async fn create(&self, request: &CreateCocheRequest) -> AppResult<Coche> {
        let coche = sqlx::query_as::<_, Coche>(
            r#"
            INSERT INTO coche (matricula, marca, modelo, caballos, persona_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING matricula, marca, modelo, caballos, persona_id
            "#,
        )
        .bind(&request.matricula)
        .bind(&request.marca)
        .bind(&request.modelo)
        .bind(request.caballos)
        .bind(request.persona_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(coche)
    }

    async fn find_all(&self) -> AppResult<Vec<Coche>> {
        let coches = sqlx::query_as::<_, Coche>(
            "SELECT matricula, marca, modelo, caballos, persona_id FROM coche ORDER BY matricula",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(coches)
    }

    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Coche>> {
        let coche = sqlx::query_as::<_, Coche>(
            "SELECT matricula, marca, modelo, caballos, persona_id FROM coche WHERE matricula = $1",
        )
        .bind(matricula)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coche)
    }

    async fn update(
        &self,
        matricula: &str,
        request: &UpdateCocheRequest,
    ) -> AppResult<Option<Coche>> {
        let coche = sqlx::query_as::<_, Coche>(
            r#"
            UPDATE coche
            SET marca = $2, modelo = $3, caballos = $4, persona_id = $5
            WHERE matricula = $1
            RETURNING matricula, marca, modelo, caballos, persona_id
            "#,
        )
        .bind(matricula)
        .bind(&request.marca)
        .bind(&request.modelo)
        .bind(request.caballos)
        .bind(request.persona_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(coche)
    }

    async fn delete(&self, matricula: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM coche WHERE matricula = $1")
            .bind(matricula)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_owner(&self, matricula: &str) -> AppResult<OwnerLookup> {
        let mut tx = self.pool.begin().await?;

        let existe: Option<(String,)> =
            sqlx::query_as("SELECT matricula FROM coche WHERE matricula = $1 FOR SHARE")
                .bind(matricula)
                .fetch_optional(&mut *tx)
                .await?;

        if existe.is_none() {
            tx.rollback().await?;
            return Ok(OwnerLookup::CocheNotFound);
        }

        let persona = sqlx::query_as::<_, Persona>(
            r#"
            SELECT p.id, p.nombre, p.apellido1, p.apellido2, p.dni
            FROM persona p
            JOIN coche c ON p.id = c.persona_id
            WHERE c.matricula = $1
            "#,
        )
        .bind(matricula)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(match persona {
            Some(persona) => OwnerLookup::Propietario(persona),
            None => OwnerLookup::SinPropietario,
        })
    }
}
