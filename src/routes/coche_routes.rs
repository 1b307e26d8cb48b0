use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::CocheController;
use crate::dto::coche_dto::{CreateCocheRequest, UpdateCocheRequest};
use crate::dto::MessageResponse;
use crate::models::{Coche, Persona};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};

pub fn create_coche_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_coche).get(list_coches))
        .route(
            "/:matricula",
            get(get_coche).put(update_coche).delete(delete_coche),
        )
        .route("/:matricula/persona", get(get_coche_owner))
}

async fn create_coche(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCocheRequest>,
) -> Result<(StatusCode, Json<Coche>), AppError> {
    let controller = CocheController::new(state.coches.clone());
    let coche = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(coche)))
}

async fn list_coches(State(state): State<AppState>) -> Result<Json<Vec<Coche>>, AppError> {
    let controller = CocheController::new(state.coches.clone());
    let coches = controller.list().await?;
    Ok(Json(coches))
}

async fn get_coche(
    State(state): State<AppState>,
    ApiPath(matricula): ApiPath<String>,
) -> Result<Json<Coche>, AppError> {
    let controller = CocheController::new(state.coches.clone());
    let coche = controller.get_by_matricula(&matricula).await?;
    Ok(Json(coche))
}

async fn update_coche(
    State(state): State<AppState>,
    ApiPath(matricula): ApiPath<String>,
    ValidatedJson(request): ValidatedJson<UpdateCocheRequest>,
) -> Result<Json<Coche>, AppError> {
    let controller = CocheController::new(state.coches.clone());
    let coche = controller.update(&matricula, request).await?;
    Ok(Json(coche))
}

async fn delete_coche(
    State(state): State<AppState>,
    ApiPath(matricula): ApiPath<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CocheController::new(state.coches.clone());
    controller.delete(&matricula).await?;
    Ok(Json(MessageResponse::new("Coche eliminado")))
}

async fn get_coche_owner(
    State(state): State<AppState>,
    ApiPath(matricula): ApiPath<String>,
) -> Result<Json<Persona>, AppError> {
    let controller = CocheController::new(state.coches.clone());
    let persona = controller.get_owner(&matricula).await?;
    Ok(Json(persona))
}
