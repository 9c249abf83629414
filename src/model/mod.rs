//! Entities and their JSON projections.
//!
//! Row structs derive `sqlx::FromRow` and serialize exactly the fields clients see.
//! Sensitive or relational columns are either not selected or skipped on output.

mod character;
mod favorite;
mod galaxy;
mod planet;
mod user;

pub use character::{Character, NewCharacter};
pub use favorite::{FavoriteRow, FavoriteTarget, FavoriteView};
pub use galaxy::{Galaxy, PlanetGalaxy};
pub use planet::{NewPlanet, Planet};
pub use user::User;

/// Column limits shared by the schema, request validation and seed validation.
pub const NAME_MAX_LEN: usize = 120;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MAX_LEN: usize = 80;
pub const TEXT_MAX_LEN: usize = 240;
