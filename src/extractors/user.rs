//! Identify the acting user from the request (`X-User-Id` header).

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the id of the user a request acts on.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Id of the user favorite routes act on. Taken from `X-User-Id`, or the configured
/// default user when the header is absent. Existence is checked by the handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(USER_ID_HEADER) {
            None => return Ok(CurrentUser(state.settings.default_user_id)),
            Some(v) => v
                .to_str()
                .map_err(|_| AppError::BadRequest(format!("{} must be ASCII", USER_ID_HEADER)))?,
        };
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("{} must be an integer user id", USER_ID_HEADER)))?;
        Ok(CurrentUser(id))
    }
}
