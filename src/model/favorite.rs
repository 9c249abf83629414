use super::{Character, Planet};
use serde::Serialize;
use utoipa::ToSchema;

/// What a favorite points at. A favorite row holds exactly one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Character(i64),
}

impl FavoriteTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Character(_) => "character",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Character(id) => *id,
        }
    }
}

/// Flat result of a favorite joined (left) to its planet and character.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub planet_name: Option<String>,
    pub planet_description: Option<String>,
    pub planet_galaxy_id: Option<i64>,
    pub character_id: Option<i64>,
    pub character_name: Option<String>,
    pub character_gender: Option<String>,
}

/// Favorite with the related planet or character inlined.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FavoriteView {
    pub id: i64,
    pub user_id: i64,
    pub planet: Option<Planet>,
    pub character: Option<Character>,
}

impl From<FavoriteRow> for FavoriteView {
    fn from(row: FavoriteRow) -> Self {
        let planet = match (row.planet_id, row.planet_name, row.planet_galaxy_id) {
            (Some(id), Some(name), Some(galaxy_id)) => Some(Planet {
                id,
                name,
                description: row.planet_description,
                galaxy_id,
            }),
            _ => None,
        };
        let character = match (row.character_id, row.character_name) {
            (Some(id), Some(name)) => Some(Character {
                id,
                name,
                gender: row.character_gender,
            }),
            _ => None,
        };
        FavoriteView {
            id: row.id,
            user_id: row.user_id,
            planet,
            character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_row() -> FavoriteRow {
        FavoriteRow {
            id: 4,
            user_id: 1,
            planet_id: Some(2),
            planet_name: Some("Hoth".into()),
            planet_description: None,
            planet_galaxy_id: Some(1),
            character_id: None,
            character_name: None,
            character_gender: None,
        }
    }

    #[test]
    fn planet_favorite_inlines_planet() {
        let view = FavoriteView::from(planet_row());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "user_id": 1,
                "planet": {"id": 2, "name": "Hoth", "description": null},
                "character": null
            })
        );
    }

    #[test]
    fn character_favorite_inlines_character() {
        let row = FavoriteRow {
            planet_id: None,
            planet_name: None,
            planet_galaxy_id: None,
            character_id: Some(9),
            character_name: Some("Chewbacca".into()),
            character_gender: Some("male".into()),
            ..planet_row()
        };
        let json = serde_json::to_value(FavoriteView::from(row)).unwrap();
        assert!(json["planet"].is_null());
        assert_eq!(json["character"]["name"], "Chewbacca");
    }

    #[test]
    fn target_reports_kind_and_id() {
        assert_eq!(FavoriteTarget::Planet(5).kind(), "planet");
        assert_eq!(FavoriteTarget::Character(3).id(), 3);
    }
}
