//! Connection pool setup for PostgreSQL or SQLite behind `sqlx::Any`.

use crate::config::{DatabaseBackend, Settings};
use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, ConnectOptions};
use std::str::FromStr;

/// Open a pool for the configured backend. For PostgreSQL the target database is created first if missing.
pub async fn connect(settings: &Settings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    if settings.backend == DatabaseBackend::Postgres {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = AnyPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    tracing::info!(backend = ?settings.backend, max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}

/// Single-connection in-memory SQLite pool. The connection is never recycled, so the data lives as long as the pool.
pub async fn connect_in_memory() -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Round-trip check used by the readiness probe.
pub async fn ping(pool: &AnyPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and `CREATE DATABASE` if the target is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: e.to_string(),
        })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a URL into the maintenance-database URL and the target database name.
/// A URL without a path yields an empty name.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let authority_start = url
        .find("://")
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?
        + 3;
    let Some(slash) = url[authority_start..].find('/') else {
        return Ok((url.to_string(), String::new()));
    };
    let path_start = authority_start + slash + 1;
    let path_and_query = &url[path_start..];
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let admin_url = format!("{}postgres", &url[..path_start]);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
