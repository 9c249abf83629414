//! Runtime settings and seed file types.

use serde::{Deserialize, Serialize};

/// Used when `DATABASE_URL` is unset: a local file-backed SQLite database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database engine selected by the connection string scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// Normalized connection string (`postgres://` rewritten to `postgresql://`).
    pub database_url: String,
    pub backend: DatabaseBackend,
    pub max_connections: u32,
    pub port: u16,
    /// User that favorite routes act on when the request carries no `X-User-Id`.
    pub default_user_id: i64,
    pub seed_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            backend: DatabaseBackend::Sqlite,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            port: DEFAULT_PORT,
            default_user_id: DEFAULT_USER_ID,
            seed_path: None,
        }
    }
}

/// Out-of-band data for entities without a creation endpoint (users, galaxies),
/// plus optional starter planets and characters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub galaxies: Vec<SeedGalaxy>,
    #[serde(default)]
    pub planets: Vec<SeedPlanet>,
    #[serde(default)]
    pub characters: Vec<SeedCharacter>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedGalaxy {
    pub name: String,
    pub coordinate_center_x: f64,
    pub coordinate_center_y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedPlanet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Galaxy referenced by name, not id.
    pub galaxy: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedCharacter {
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
}
