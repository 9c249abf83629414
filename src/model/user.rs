use serde::Serialize;
use utoipa::ToSchema;

/// A user as exposed over HTTP. The password column is never selected into this type.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub email: String,
}
