//! A user's favorite planets and characters.

use crate::error::{is_unique_violation, AppError};
use crate::model::{FavoriteRow, FavoriteTarget, FavoriteView};
use crate::service::CatalogService;
use sqlx::AnyPool;

const FAVORITE_SELECT: &str = "SELECT f.id AS id, f.user_id AS user_id, \
     p.id AS planet_id, p.name AS planet_name, p.description AS planet_description, p.galaxy_id AS planet_galaxy_id, \
     c.id AS character_id, c.name AS character_name, c.gender AS character_gender \
     FROM favorites f \
     LEFT JOIN planets p ON p.id = f.planet_id \
     LEFT JOIN characters c ON c.id = f.character_id";

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites of one user with planets and characters inlined, oldest first.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<FavoriteView>, AppError> {
        let sql = format!("{} WHERE f.user_id = $1 ORDER BY f.id", FAVORITE_SELECT);
        let rows = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FavoriteView::from).collect())
    }

    pub async fn find(pool: &AnyPool, favorite_id: i64) -> Result<Option<FavoriteView>, AppError> {
        let sql = format!("{} WHERE f.id = $1", FAVORITE_SELECT);
        let row = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(favorite_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(FavoriteView::from))
    }

    /// Record that `user_id` likes `target`. User and target must exist; each pair can be added once.
    pub async fn add(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<FavoriteView, AppError> {
        CatalogService::require_user(pool, user_id).await?;
        let target_exists = match target {
            FavoriteTarget::Planet(id) => CatalogService::find_planet(pool, id).await?.is_some(),
            FavoriteTarget::Character(id) => CatalogService::find_character(pool, id).await?.is_some(),
        };
        if !target_exists {
            return Err(AppError::NotFound(format!("{} {} does not exist", target.kind(), target.id())));
        }

        let sql = match target {
            FavoriteTarget::Planet(_) => "INSERT INTO favorites (user_id, planet_id) VALUES ($1, $2) RETURNING id",
            FavoriteTarget::Character(_) => {
                "INSERT INTO favorites (user_id, character_id) VALUES ($1, $2) RETURNING id"
            }
        };
        let favorite_id: i64 = sqlx::query_scalar(sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_one(pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict(format!(
                        "{} {} is already a favorite of user {}",
                        target.kind(),
                        target.id(),
                        user_id
                    ))
                } else {
                    AppError::Db(e)
                }
            })?;
        tracing::info!(favorite_id, user_id, kind = target.kind(), target_id = target.id(), "favorite added");

        Self::find(pool, favorite_id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Delete the favorite linking `user_id` to `target`. Missing favorite is `NotFound`.
    pub async fn remove(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<(), AppError> {
        let sql = match target {
            FavoriteTarget::Planet(_) => "DELETE FROM favorites WHERE user_id = $1 AND planet_id = $2",
            FavoriteTarget::Character(_) => "DELETE FROM favorites WHERE user_id = $1 AND character_id = $2",
        };
        let result = sqlx::query(sql)
            .bind(user_id)
            .bind(target.id())
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} is not a favorite of user {}",
                target.kind(),
                target.id(),
                user_id
            )));
        }
        tracing::info!(user_id, kind = target.kind(), target_id = target.id(), "favorite removed");
        Ok(())
    }
}
