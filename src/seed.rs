//! Apply seed data for entities that have no creation endpoint. Rows that already exist are skipped.

use crate::config::{validate_seed, SeedData};
use crate::error::AppError;
use crate::service::CatalogService;
use sqlx::AnyPool;
use std::collections::HashSet;

/// Rows inserted per table by one [`apply_seed`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub galaxies: u64,
    pub planets: u64,
    pub characters: u64,
}

pub async fn apply_seed(pool: &AnyPool, seed: &SeedData) -> Result<SeedReport, AppError> {
    let existing: HashSet<String> = CatalogService::list_galaxies(pool)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    validate_seed(seed, &existing)?;

    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for u in &seed.users {
        report.users += sqlx::query(
            "INSERT INTO users (email, password) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING",
        )
        .bind(&u.email)
        .bind(&u.password)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    for g in &seed.galaxies {
        report.galaxies += sqlx::query(
            "INSERT INTO galaxies (name, coordinate_center_x, coordinate_center_y) VALUES ($1, $2, $3) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&g.name)
        .bind(g.coordinate_center_x)
        .bind(g.coordinate_center_y)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    for p in &seed.planets {
        report.planets += sqlx::query(
            "INSERT INTO planets (name, description, galaxy_id) \
             SELECT $1, $2, id FROM galaxies WHERE name = $3 \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&p.name)
        .bind(p.description.as_deref())
        .bind(&p.galaxy)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    for c in &seed.characters {
        report.characters += sqlx::query(
            "INSERT INTO characters (name, gender) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(&c.name)
        .bind(c.gender.as_deref())
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    tracing::info!(
        users = report.users,
        galaxies = report.galaxies,
        planets = report.planets,
        characters = report.characters,
        "seed applied"
    );
    Ok(report)
}
