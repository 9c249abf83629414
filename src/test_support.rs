use crate::config::{DatabaseBackend, SeedCharacter, SeedData, SeedGalaxy, SeedPlanet, SeedUser, Settings};
use crate::migration::apply_migrations;
use crate::seed::apply_seed;
use crate::state::AppState;
use sqlx::AnyPool;

pub fn sample_seed() -> SeedData {
    SeedData {
        users: vec![
            SeedUser {
                email: "luke@rebellion.org".into(),
                password: "tosche-station".into(),
            },
            SeedUser {
                email: "leia@rebellion.org".into(),
                password: "alderaan".into(),
            },
        ],
        galaxies: vec![
            SeedGalaxy {
                name: "Milky Way".into(),
                coordinate_center_x: 0.0,
                coordinate_center_y: 0.0,
            },
            SeedGalaxy {
                name: "Andromeda".into(),
                coordinate_center_x: 2.5,
                coordinate_center_y: -1.25,
            },
        ],
        planets: vec![
            SeedPlanet {
                name: "Tatooine".into(),
                description: Some("Desert world with two suns".into()),
                galaxy: "Milky Way".into(),
            },
            SeedPlanet {
                name: "Alderaan".into(),
                description: None,
                galaxy: "Andromeda".into(),
            },
        ],
        characters: vec![SeedCharacter {
            name: "Han Solo".into(),
            gender: Some("male".into()),
        }],
    }
}

/// In-memory SQLite database with the schema applied and no rows.
pub async fn migrated_pool() -> AnyPool {
    let pool = crate::store::connect_in_memory().await.unwrap();
    apply_migrations(&pool, DatabaseBackend::Sqlite).await.unwrap();
    pool
}

/// Users 1-2, galaxies 1-2, planets 1 (Tatooine) and 2 (Alderaan), character 1 (Han Solo).
pub async fn seeded_pool() -> AnyPool {
    let pool = migrated_pool().await;
    apply_seed(&pool, &sample_seed()).await.unwrap();
    pool
}

pub async fn seeded_state() -> AppState {
    AppState::new(seeded_pool().await, Settings::default())
}
