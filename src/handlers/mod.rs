//! HTTP handlers: users, planets, characters, favorites, and the endpoint map.

pub mod characters;
pub mod favorites;
pub mod index;
pub mod planets;
pub mod users;

use crate::error::AppError;
use crate::service::{RequestValidator, ValidationRule};
use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwrap a JSON body, check it against `rules`, and deserialize it.
pub(crate) fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
    rules: &[(&str, ValidationRule)],
) -> Result<T, AppError> {
    let Json(body) = payload?;
    RequestValidator::validate(&body, rules)?;
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}
