//! Base de datos PostgreSQL para los tests de integración.
//!
//! Los tests sólo corren si `TEST_DATABASE_URL` apunta a un servidor
//! accesible; sin la variable se saltan con un aviso `SKIP-TEST-DATABASE`.
//! Si la variable existe pero el servidor no responde, el test falla.
//!
//! Cada test trabaja en un schema propio (`search_path` fijado en la
//! conexión), así que pueden correr en paralelo sobre la misma base de
//! datos sin verse entre sí.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use personas_coches_api::database::connection::ensure_schema;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

pub struct TestDatabase {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDatabase {
    /// Borrar el schema del test y cerrar los pools
    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
        self.admin.close().await;
    }
}

/// Crear un schema vacío con las tablas `persona` y `coche`
pub async fn test_database() -> Option<TestDatabase> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL} no está definida");
        return None;
    };

    let schema = format!(
        "prueba_{}_{}",
        std::process::id(),
        NEXT_SCHEMA.fetch_add(1, Ordering::SeqCst)
    );

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .unwrap_or_else(|e| panic!("Test database setup failed: {e}. Unset {TEST_DATABASE_URL} to skip."));

    sqlx::query(&format!("DROP SCHEMA IF EXISTS {schema} CASCADE"))
        .execute(&admin)
        .await
        .expect("drop stale test schema");
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&admin)
        .await
        .expect("create test schema");

    let options = PgConnectOptions::from_str(&url)
        .expect("valid TEST_DATABASE_URL")
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .expect("connect to test schema");

    ensure_schema(&pool).await.expect("create tables");

    Some(TestDatabase {
        pool,
        admin,
        schema,
    })
}
