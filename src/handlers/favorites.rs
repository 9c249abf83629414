//! Add and remove favorites of the current user.

use crate::error::{AppError, ErrorBody};
use crate::extractors::CurrentUser;
use crate::model::FavoriteTarget;
use crate::response::{message, ok, FavoriteCreated, Message};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
};

async fn add(state: &AppState, user_id: i64, target: FavoriteTarget) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::add(&state.pool, user_id, target).await?;
    Ok(ok(FavoriteCreated {
        msg: added_message(target).into(),
        favorite,
    }))
}

async fn remove(state: &AppState, user_id: i64, target: FavoriteTarget) -> Result<impl IntoResponse, AppError> {
    FavoriteService::remove(&state.pool, user_id, target).await?;
    Ok(message(removed_message(target)))
}

fn added_message(target: FavoriteTarget) -> &'static str {
    match target {
        FavoriteTarget::Planet(_) => "Planet added to favorites",
        FavoriteTarget::Character(_) => "Character added to favorites",
    }
}

fn removed_message(target: FavoriteTarget) -> &'static str {
    match target {
        FavoriteTarget::Planet(_) => "Favorite planet removed",
        FavoriteTarget::Character(_) => "Favorite character removed",
    }
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = "favorites",
    params(
        ("planet_id" = i64, Path, description = "Planet to add"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user; defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Favorite created", body = FavoriteCreated),
        (status = 404, description = "User or planet does not exist", body = ErrorBody),
        (status = 409, description = "Planet is already a favorite", body = ErrorBody)
    )
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = path?;
    add(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = "favorites",
    params(
        ("planet_id" = i64, Path, description = "Planet to remove"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user; defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = Message),
        (status = 404, description = "No such favorite", body = ErrorBody)
    )
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = path?;
    remove(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

#[utoipa::path(
    post,
    path = "/favorite/character/{character_id}",
    tag = "favorites",
    params(
        ("character_id" = i64, Path, description = "Character to add"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user; defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Favorite created", body = FavoriteCreated),
        (status = 404, description = "User or character does not exist", body = ErrorBody),
        (status = 409, description = "Character is already a favorite", body = ErrorBody)
    )
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(character_id) = path?;
    add(&state, user_id, FavoriteTarget::Character(character_id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/character/{character_id}",
    tag = "favorites",
    params(
        ("character_id" = i64, Path, description = "Character to remove"),
        ("X-User-Id" = Option<i64>, Header, description = "Acting user; defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = Message),
        (status = 404, description = "No such favorite", body = ErrorBody)
    )
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(character_id) = path?;
    remove(&state, user_id, FavoriteTarget::Character(character_id)).await
}
