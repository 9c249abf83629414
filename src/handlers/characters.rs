use super::parse_body;
use crate::error::{AppError, ErrorBody};
use crate::model::{Character, NewCharacter};
use crate::response::ok;
use crate::service::{CatalogService, CHARACTER_RULES};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/character",
    tag = "characters",
    responses((status = 200, description = "Every character", body = Vec<Character>))
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CatalogService::list_characters(&state.pool).await?;
    Ok(ok(characters))
}

#[utoipa::path(
    post,
    path = "/character",
    tag = "characters",
    request_body = NewCharacter,
    responses(
        (status = 200, description = "Created character", body = Character),
        (status = 409, description = "Name already taken", body = ErrorBody),
        (status = 422, description = "Missing or invalid field", body = ErrorBody)
    )
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewCharacter = parse_body(payload, CHARACTER_RULES)?;
    let character = CatalogService::create_character(&state.pool, &new).await?;
    Ok(ok(character))
}
