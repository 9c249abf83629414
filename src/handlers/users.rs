use crate::error::{AppError, ErrorBody};
use crate::extractors::CurrentUser;
use crate::model::User;
use crate::response::{ok, FavoriteList};
use crate::service::{CatalogService, FavoriteService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    responses((status = 200, description = "Every user, without passwords", body = Vec<User>))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = CatalogService::list_users(&state.pool).await?;
    Ok(ok(users))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = "favorites",
    params(("X-User-Id" = Option<i64>, Header, description = "Acting user; defaults to the configured user")),
    responses(
        (status = 200, description = "Favorites of the current user", body = FavoriteList),
        (status = 404, description = "Current user does not exist", body = ErrorBody)
    )
)]
pub async fn list_current_user_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let user = CatalogService::require_user(&state.pool, user_id).await?;
    let favorites = FavoriteService::list_for_user(&state.pool, user.id).await?;
    Ok(ok(FavoriteList {
        msg: format!("Here are the favorites of {}", user.email),
        favorites,
    }))
}
