use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
}

/// Body of `POST /character`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewCharacter {
    pub name: String,
    pub gender: String,
}
