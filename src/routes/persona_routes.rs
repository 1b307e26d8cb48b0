use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::PersonaController;
use crate::dto::persona_dto::PersonaRequest;
use crate::dto::MessageResponse;
use crate::models::{Coche, Persona};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};

pub fn create_persona_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_persona).get(list_personas))
        .route(
            "/:id",
            get(get_persona).put(update_persona).delete(delete_persona),
        )
        .route("/:id/coches", get(list_persona_coches))
}

async fn create_persona(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PersonaRequest>,
) -> Result<(StatusCode, Json<Persona>), AppError> {
    let controller = PersonaController::new(state.personas.clone());
    let persona = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(persona)))
}

async fn list_personas(State(state): State<AppState>) -> Result<Json<Vec<Persona>>, AppError> {
    let controller = PersonaController::new(state.personas.clone());
    let personas = controller.list().await?;
    Ok(Json(personas))
}

async fn get_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Persona>, AppError> {
    let controller = PersonaController::new(state.personas.clone());
    let persona = controller.get_by_id(id).await?;
    Ok(Json(persona))
}

async fn update_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<PersonaRequest>,
) -> Result<Json<Persona>, AppError> {
    let controller = PersonaController::new(state.personas.clone());
    let persona = controller.update(id, request).await?;
    Ok(Json(persona))
}

async fn delete_persona(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = PersonaController::new(state.personas.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Persona eliminada correctamente")))
}

async fn list_persona_coches(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Vec<Coche>>, AppError> {
    let controller = PersonaController::new(state.personas.clone());
    let coches = controller.list_coches(id).await?;
    Ok(Json(coches))
}
