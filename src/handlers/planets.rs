use super::parse_body;
use crate::error::{AppError, ErrorBody};
use crate::model::{NewPlanet, Planet, PlanetGalaxy};
use crate::response::ok;
use crate::service::{CatalogService, PLANET_RULES};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/planet",
    tag = "planets",
    responses((status = 200, description = "Every planet", body = Vec<Planet>))
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = CatalogService::list_planets(&state.pool).await?;
    Ok(ok(planets))
}

#[utoipa::path(
    get,
    path = "/planet-galaxy",
    tag = "planets",
    responses((status = 200, description = "Each planet with its galaxy", body = Vec<PlanetGalaxy>))
)]
pub async fn list_planet_galaxies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_planet_galaxies(&state.pool).await?;
    Ok(ok(rows))
}

#[utoipa::path(
    post,
    path = "/planet",
    tag = "planets",
    request_body = NewPlanet,
    responses(
        (status = 200, description = "Created planet", body = Planet),
        (status = 404, description = "Galaxy does not exist", body = ErrorBody),
        (status = 409, description = "Name already taken", body = ErrorBody),
        (status = 422, description = "Missing or invalid field", body = ErrorBody)
    )
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewPlanet = parse_body(payload, PLANET_RULES)?;
    let planet = CatalogService::create_planet(&state.pool, &new).await?;
    Ok(ok(planet))
}
