use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Exposed through `/planet-galaxy`, not the planet projection.
    #[serde(skip)]
    pub galaxy_id: i64,
}

/// Body of `POST /planet`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewPlanet {
    pub name: String,
    pub description: String,
    pub galaxy_id: i64,
}
