use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Galaxy {
    pub id: i64,
    pub name: String,
    pub coordinate_center_x: f64,
    pub coordinate_center_y: f64,
}

/// One planet joined to the galaxy it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct PlanetGalaxy {
    pub planet: String,
    pub galaxy_id: i64,
    pub galaxy_name: String,
}
