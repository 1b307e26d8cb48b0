//! Router de la API
//!
//! `/api/personas` y `/api/coches`, más un health check. Las rutas
//! desconocidas (404) y los métodos no soportados (405) responden en el
//! mismo formato JSON que el resto.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub mod coche_routes;
pub mod persona_routes;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/personas", persona_routes::create_persona_router())
        .nest("/api/coches", coche_routes::create_coche_router())
        // Debe ir después de `nest`: sólo afecta a las rutas ya registradas
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "storage": state.config.storage.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Ruta no encontrada".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
