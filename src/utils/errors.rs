//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la API y su conversión a respuestas
//! HTTP. Los errores de la base de datos se clasifican antes de llegar al
//! cliente: el texto crudo de PostgreSQL sólo se escribe en el log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Coche {0} sin propietario")]
    NoOwner(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

// Códigos SQLSTATE de PostgreSQL que son culpa de la petición, no del servidor
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";
const NOT_NULL_VIOLATION: &str = "23502";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let classified = match &e {
            sqlx::Error::Database(db) => classify_sqlstate(db.code().as_deref(), db.message()),
            _ => None,
        };
        classified.unwrap_or(AppError::Database(e))
    }
}

/// Clasificar un error de PostgreSQL por su SQLSTATE
///
/// Devuelve `None` cuando el error es del servidor. El mensaje de
/// PostgreSQL se queda en el log; el cliente recibe un texto fijo.
fn classify_sqlstate(code: Option<&str>, message: &str) -> Option<AppError> {
    let error = match code? {
        FOREIGN_KEY_VIOLATION => foreign_key_error(),
        UNIQUE_VIOLATION => duplicate_key_error(),
        NOT_NULL_VIOLATION => AppError::BadRequest("Falta un campo obligatorio".to_string()),
        INVALID_TEXT_REPRESENTATION => {
            AppError::BadRequest("Un campo tiene un formato inválido".to_string())
        }
        STRING_DATA_RIGHT_TRUNCATION => {
            AppError::BadRequest("Un campo supera la longitud permitida".to_string())
        }
        _ => return None,
    };
    warn!("⚠️ Petición rechazada por PostgreSQL: {}", message);
    Some(error)
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::NoOwner(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::NoOwner(_) => "SIN_PROPIETARIO",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                ("Error interno del servidor".to_string(), None)
            }
            AppError::Validation(e) => {
                warn!("⚠️ Datos inválidos: {}", e);
                ("Los datos enviados no son válidos".to_string(), Some(json!(e)))
            }
            AppError::NoOwner(matricula) => {
                (format!("El coche {} no tiene propietario", matricula), None)
            }
            AppError::MethodNotAllowed => ("Método no permitido".to_string(), None),
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::BadRequest(msg) => {
                (msg, None)
            }
        };

        let body = ErrorResponse {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para un `persona_id` que no apunta a ninguna persona
pub fn foreign_key_error() -> AppError {
    AppError::BadRequest("La persona referenciada no existe".to_string())
}

/// Función helper para una clave primaria repetida
pub fn duplicate_key_error() -> AppError {
    AppError::Conflict("Ya existe un registro con esa clave".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = body_json(AppError::NotFound("Coche no encontrado".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Coche no encontrado");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_is_not_leaked() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DB_ERROR");
        assert_eq!(body["error"], "Error interno del servidor");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_no_owner_is_404_with_own_code() {
        let (status, body) = body_json(AppError::NoOwner("1234ABC".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SIN_PROPIETARIO");
        assert!(body["error"].as_str().unwrap().contains("1234ABC"));
    }

    #[test]
    fn test_non_database_sqlx_errors_stay_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_constraint_violations_map_to_client_errors() {
        let err = classify_sqlstate(Some("23503"), "insert or update on table \"coche\"").unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: La persona referenciada no existe");

        let err = classify_sqlstate(Some("23505"), "duplicate key value").unwrap();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_postgres_message_is_not_sent_to_client() {
        let raw = "value too long for type character varying(20)";
        for code in ["23502", "22P02", "22001"] {
            let err = classify_sqlstate(Some(code), raw).unwrap();
            let (status, body) = body_json(err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], "BAD_REQUEST");
            let message = body["error"].as_str().unwrap();
            assert!(!message.is_empty());
            assert!(!message.contains("character varying"), "{code}: {message}");
        }
    }

    #[test]
    fn test_unknown_sqlstate_is_left_to_the_server() {
        assert!(classify_sqlstate(Some("40001"), "could not serialize access").is_none());
        assert!(classify_sqlstate(None, "").is_none());
    }

    #[tokio::test]
    async fn test_method_not_allowed_is_json() {
        let (status, body) = body_json(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["error"], "Método no permitido");
    }
}
