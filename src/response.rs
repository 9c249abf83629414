//! Response bodies and helpers shared by the handlers.

use crate::model::FavoriteView;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Message {
    pub msg: String,
}

#[derive(Serialize, ToSchema)]
pub struct FavoriteCreated {
    pub msg: String,
    pub favorite: FavoriteView,
}

#[derive(Serialize, ToSchema)]
pub struct FavoriteList {
    pub msg: String,
    pub favorites: Vec<FavoriteView>,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    ok(Message { msg: msg.into() })
}
