//! Shared application state for all routes.

use crate::config::{load_seed_file, Settings};
use crate::error::AppError;
use crate::migration::apply_migrations;
use crate::seed::apply_seed;
use crate::store;
use sqlx::AnyPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// Immutable after startup.
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: AnyPool, settings: Settings) -> Self {
        AppState {
            pool,
            settings: Arc::new(settings),
        }
    }
}

/// Connect, create the schema, and apply the seed file when one is configured.
pub async fn init(settings: Settings) -> Result<AppState, AppError> {
    let pool = store::connect(&settings).await?;
    apply_migrations(&pool, settings.backend).await?;
    if let Some(path) = &settings.seed_path {
        let seed = load_seed_file(path).await?;
        apply_seed(&pool, &seed).await?;
    }
    Ok(AppState::new(pool, settings))
}
