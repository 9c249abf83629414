//! Persistence operations behind the HTTP handlers, plus request validation.

mod catalog;
mod favorites;
mod validation;
pub use catalog::CatalogService;
pub use favorites::FavoriteService;
pub use validation::{is_valid_email, FieldKind, RequestValidator, ValidationRule, CHARACTER_RULES, PLANET_RULES};
