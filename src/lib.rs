//! Galaxy API: planets, characters and user favorites over a relational database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{DatabaseBackend, SeedData, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use seed::{apply_seed, SeedReport};
pub use service::{CatalogService, FavoriteService};
pub use state::{init, AppState};
