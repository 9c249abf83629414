//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing reference: {kind} '{id}'")]
    MissingReference { kind: &'static str, id: String },
    #[error("unsupported database url scheme: {0}")]
    UnsupportedDatabase(String),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("seed file: {0}")]
    Seed(String),
    #[error("seed validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Status code and machine-readable code for the response body.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Db(sqlx::Error::RowNotFound) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Db(e) => match db_error_kind(e) {
                Some(ErrorKind::UniqueViolation) => (StatusCode::CONFLICT, "conflict"),
                Some(ErrorKind::ForeignKeyViolation)
                | Some(ErrorKind::NotNullViolation)
                | Some(ErrorKind::CheckViolation) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "constraint_violation")
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            },
        }
    }
}

impl AppError {
    /// Message exposed to clients. Database internals are not echoed back.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::Conflict(m)
            | AppError::BadRequest(m) => m.clone(),
            AppError::Config(_) => "server configuration error".into(),
            AppError::Db(sqlx::Error::RowNotFound) => "record not found".into(),
            AppError::Db(e) => match db_error_kind(e) {
                Some(ErrorKind::UniqueViolation) => "a record with the same unique value already exists".into(),
                Some(ErrorKind::ForeignKeyViolation) => "referenced record does not exist".into(),
                Some(ErrorKind::NotNullViolation) => "a required value is missing".into(),
                Some(ErrorKind::CheckViolation) => "record violates a table constraint".into(),
                _ => "internal database error".into(),
            },
        }
    }
}

/// Constraint kind reported by the database driver, if the error came from the database.
pub fn db_error_kind(e: &sqlx::Error) -> Option<ErrorKind> {
    e.as_database_error().map(|d| d.kind())
}

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(db_error_kind(e), Some(ErrorKind::UniqueViolation))
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// JSON body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        } else {
            tracing::debug!(error = %self, code, "request rejected");
        }
        let body = ErrorBody {
            error: self.public_message(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
