//! Users, galaxies, planets and characters.

use crate::error::{is_unique_violation, AppError};
use crate::model::{Character, Galaxy, NewCharacter, NewPlanet, Planet, PlanetGalaxy, User};
use sqlx::AnyPool;

pub struct CatalogService;

impl CatalogService {
    pub async fn list_users(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>("SELECT id, email FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_user(pool: &AnyPool, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Like [`find_user`](Self::find_user) but a missing user is an error.
    pub async fn require_user(pool: &AnyPool, id: i64) -> Result<User, AppError> {
        Self::find_user(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} does not exist", id)))
    }

    pub async fn find_galaxy(pool: &AnyPool, id: i64) -> Result<Option<Galaxy>, AppError> {
        let row = sqlx::query_as::<_, Galaxy>(
            "SELECT id, name, coordinate_center_x, coordinate_center_y FROM galaxies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn list_galaxies(pool: &AnyPool) -> Result<Vec<Galaxy>, AppError> {
        let rows = sqlx::query_as::<_, Galaxy>(
            "SELECT id, name, coordinate_center_x, coordinate_center_y FROM galaxies ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_planets(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let rows = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description, galaxy_id FROM planets ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_planet(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description, galaxy_id FROM planets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Every planet with the id and name of its galaxy.
    pub async fn list_planet_galaxies(pool: &AnyPool) -> Result<Vec<PlanetGalaxy>, AppError> {
        let rows = sqlx::query_as::<_, PlanetGalaxy>(
            "SELECT p.name AS planet, g.id AS galaxy_id, g.name AS galaxy_name \
             FROM planets p JOIN galaxies g ON g.id = p.galaxy_id ORDER BY p.id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a planet. The galaxy must exist and the name must be unused.
    pub async fn create_planet(pool: &AnyPool, new: &NewPlanet) -> Result<Planet, AppError> {
        if Self::find_galaxy(pool, new.galaxy_id).await?.is_none() {
            return Err(AppError::NotFound(format!("galaxy {} does not exist", new.galaxy_id)));
        }
        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, description, galaxy_id) VALUES ($1, $2, $3) \
             RETURNING id, name, description, galaxy_id",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.galaxy_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("planet '{}' already exists", new.name))
            } else {
                AppError::Db(e)
            }
        })?;
        tracing::info!(planet_id = planet.id, galaxy_id = planet.galaxy_id, "planet created");
        Ok(planet)
    }

    pub async fn list_characters(pool: &AnyPool) -> Result<Vec<Character>, AppError> {
        let rows = sqlx::query_as::<_, Character>("SELECT id, name, gender FROM characters ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_character(pool: &AnyPool, id: i64) -> Result<Option<Character>, AppError> {
        let row = sqlx::query_as::<_, Character>("SELECT id, name, gender FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create_character(pool: &AnyPool, new: &NewCharacter) -> Result<Character, AppError> {
        let character = sqlx::query_as::<_, Character>(
            "INSERT INTO characters (name, gender) VALUES ($1, $2) RETURNING id, name, gender",
        )
        .bind(&new.name)
        .bind(&new.gender)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("character '{}' already exists", new.name))
            } else {
                AppError::Db(e)
            }
        })?;
        tracing::info!(character_id = character.id, "character created");
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_pool;

    fn planet(name: &str, galaxy_id: i64) -> NewPlanet {
        NewPlanet {
            name: name.into(),
            description: format!("{} description", name),
            galaxy_id,
        }
    }

    #[tokio::test]
    async fn users_are_listed_without_password() {
        let pool = seeded_pool().await;
        let users = CatalogService::list_users(&pool).await.unwrap();
        assert_eq!(users.len(), 2);
        for user in &users {
            let json = serde_json::to_value(user).unwrap();
            assert!(json.get("password").is_none());
            assert_eq!(json.as_object().unwrap().len(), 2);
        }
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let pool = seeded_pool().await;
        let err = CatalogService::require_user(&pool, 99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn planet_is_created_in_its_galaxy() {
        let pool = seeded_pool().await;
        let created = CatalogService::create_planet(&pool, &planet("Bespin", 1)).await.unwrap();
        assert_eq!(created.galaxy_id, 1);
        assert_eq!(created.description.as_deref(), Some("Bespin description"));

        let relations = CatalogService::list_planet_galaxies(&pool).await.unwrap();
        assert!(relations.contains(&PlanetGalaxy {
            planet: "Bespin".into(),
            galaxy_id: 1,
            galaxy_name: "Milky Way".into(),
        }));
    }

    #[tokio::test]
    async fn planet_in_unknown_galaxy_is_rejected() {
        let pool = seeded_pool().await;
        let err = CatalogService::create_planet(&pool, &planet("Kamino", 42)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(m) if m.contains("galaxy 42")));
        assert!(CatalogService::list_planets(&pool)
            .await
            .unwrap()
            .iter()
            .all(|p| p.name != "Kamino"));
    }

    #[tokio::test]
    async fn duplicate_planet_name_is_a_conflict() {
        let pool = seeded_pool().await;
        CatalogService::create_planet(&pool, &planet("Mustafar", 1)).await.unwrap();
        let err = CatalogService::create_planet(&pool, &planet("Mustafar", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_character_name_is_a_conflict() {
        let pool = seeded_pool().await;
        let new = NewCharacter {
            name: "Yoda".into(),
            gender: "male".into(),
        };
        let first = CatalogService::create_character(&pool, &new).await.unwrap();
        assert_eq!(
            CatalogService::find_character(&pool, first.id).await.unwrap(),
            Some(first)
        );
        let err = CatalogService::create_character(&pool, &new).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
