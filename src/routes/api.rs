//! Public API routes. Paths and methods match the endpoint map served at `/`.

use crate::handlers::{characters, favorites, index, planets, users};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::sitemap))
        .route("/openapi.json", get(index::openapi_json))
        .route("/user", get(users::list_users))
        .route("/users/favorites", get(users::list_current_user_favorites))
        .route("/planet", get(planets::list_planets).post(planets::create_planet))
        .route("/planet-galaxy", get(planets::list_planet_galaxies))
        .route("/character", get(characters::list_characters).post(characters::create_character))
        .route(
            "/favorite/planet/:planet_id",
            post(favorites::add_favorite_planet).delete(favorites::delete_favorite_planet),
        )
        .route(
            "/favorite/character/:character_id",
            post(favorites::add_favorite_character).delete(favorites::delete_favorite_character),
        )
        .with_state(state)
}
