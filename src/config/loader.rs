//! Load settings from the environment and seed data from a JSON file.

use super::types::*;
use crate::error::ConfigError;
use std::path::Path;

impl Settings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| normalize_database_url(&s))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let backend = backend_for_url(&database_url)?;

        Ok(Settings {
            backend,
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            default_user_id: parse_or(&lookup, "DEFAULT_USER_ID", DEFAULT_USER_ID)?,
            seed_path: lookup("SEED_PATH").filter(|s| !s.trim().is_empty()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Rewrite the legacy `postgres://` scheme to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

pub fn backend_for_url(url: &str) -> Result<DatabaseBackend, ConfigError> {
    let scheme = url.split(':').next().unwrap_or("");
    match scheme {
        "postgresql" | "postgres" => Ok(DatabaseBackend::Postgres),
        "sqlite" => Ok(DatabaseBackend::Sqlite),
        _ => Err(ConfigError::UnsupportedDatabase(scheme.to_string())),
    }
}

pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<SeedData, ConfigError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Seed(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Seed(format!("{}: {}", path.display(), e)))
}
