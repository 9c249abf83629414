//! OpenAPI document for the HTTP API.

use crate::error::ErrorBody;
use crate::handlers::{characters, favorites, index, planets, users};
use crate::model::{Character, FavoriteView, NewCharacter, NewPlanet, Planet, PlanetGalaxy, User};
use crate::response::{FavoriteCreated, FavoriteList, Message};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Galaxy API", description = "Planets, characters and user favorites"),
    paths(
        index::sitemap,
        index::openapi_json,
        users::list_users,
        users::list_current_user_favorites,
        planets::list_planets,
        planets::list_planet_galaxies,
        planets::create_planet,
        characters::list_characters,
        characters::create_character,
        favorites::add_favorite_planet,
        favorites::delete_favorite_planet,
        favorites::add_favorite_character,
        favorites::delete_favorite_character,
    ),
    components(schemas(
        User,
        Planet,
        NewPlanet,
        PlanetGalaxy,
        Character,
        NewCharacter,
        FavoriteView,
        FavoriteCreated,
        FavoriteList,
        Message,
        ErrorBody,
        index::Endpoint,
        index::EndpointMap,
    ))
)]
pub struct ApiDoc;
